use tree_sitter::{Node, Parser};

use crate::error::{OutlineError, Result};
use crate::types::ExtractionResult;

/// Native-syntax walker for Python, the one language with a production-grade
/// parser available. Walks top-level declarations and emits signature lines
/// only; bodies, defaults and type annotations are dropped.
pub struct PythonAstWalker {
    parser: Parser,
}

impl PythonAstWalker {
    /// Create a walker with the Python grammar loaded.
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| OutlineError::tree_sitter(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    /// Produce the outline for one file's content.
    ///
    /// A tree containing syntax errors is reported as a parse error so the
    /// caller can degrade to the heuristic path for this file.
    pub fn outline(&mut self, content: &str) -> Result<ExtractionResult> {
        let tree = self
            .parser
            .parse(content, None)
            .ok_or_else(|| OutlineError::parse("Failed to parse source code"))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(OutlineError::parse("Source contains syntax errors"));
        }

        let mut result = ExtractionResult::new();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            emit_declaration(content, child, &mut result);
        }
        Ok(result)
    }
}

fn emit_declaration(content: &str, node: Node, result: &mut ExtractionResult) {
    let node = resolve_decorated(node);
    match node.kind() {
        "function_definition" => result.push(format_function(content, node)),
        "class_definition" => emit_class(content, node, result),
        _ => {}
    }
}

/// Decorated definitions wrap the real declaration node.
fn resolve_decorated(node: Node) -> Node {
    if node.kind() == "decorated_definition" {
        if let Some(inner) = node.child_by_field_name("definition") {
            return inner;
        }
    }
    node
}

fn emit_class(content: &str, node: Node, result: &mut ExtractionResult) {
    let Some(name) = node.child_by_field_name("name") else {
        return;
    };
    let name = node_text(content, name);

    let bases = node
        .child_by_field_name("superclasses")
        .map(|list| {
            let mut cursor = list.walk();
            list.named_children(&mut cursor)
                .map(|base| node_text(content, base).to_string())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    if bases.is_empty() {
        result.push(format!("class {name}:"));
    } else {
        result.push(format!("class {name}({}):", bases.join(", ")));
    }

    let Some(body) = node.child_by_field_name("body") else {
        return;
    };
    let mut cursor = body.walk();
    for statement in body.children(&mut cursor) {
        let statement = resolve_decorated(statement);
        if statement.kind() == "function_definition" {
            result.push(format!("  {}", format_function(content, statement)));
        }
    }
}

/// Emit `"{def-keyword} {name}({args})"` with arguments reduced to bare
/// names plus `*args`/`**kwargs` markers.
fn format_function(content: &str, node: Node) -> String {
    let is_async = node
        .child(0)
        .map(|child| child.kind() == "async")
        .unwrap_or(false);
    let keyword = if is_async { "async def" } else { "def" };

    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(content, n))
        .unwrap_or_default();

    let args = node
        .child_by_field_name("parameters")
        .map(|params| parameter_names(content, params))
        .unwrap_or_default();

    format!("{keyword} {name}({args})")
}

fn parameter_names(content: &str, params: Node) -> String {
    let mut names: Vec<String> = Vec::new();
    let mut cursor = params.walk();

    for child in params.named_children(&mut cursor) {
        match child.kind() {
            "identifier" => names.push(node_text(content, child).to_string()),
            // Splat patterns span their own marker: `*args`, `**kwargs`.
            "list_splat_pattern" | "dictionary_splat_pattern" => {
                names.push(node_text(content, child).to_string());
            }
            // Annotated parameters: keep the bare name or splat, drop the type.
            "typed_parameter" => {
                if let Some(inner) = bare_parameter_child(child) {
                    names.push(node_text(content, inner).to_string());
                }
            }
            // Defaulted parameters: keep the name, drop the default.
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = child.child_by_field_name("name") {
                    names.push(node_text(content, name).to_string());
                }
            }
            "tuple_pattern" => names.push(node_text(content, child).to_string()),
            // `/` and bare `*` separators carry no name.
            _ => {}
        }
    }

    names.join(", ")
}

fn bare_parameter_child<'tree>(node: Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let result = node.children(&mut cursor).find(|child| {
        matches!(
            child.kind(),
            "identifier" | "list_splat_pattern" | "dictionary_splat_pattern"
        )
    });
    result
}

fn node_text<'a>(content: &'a str, node: Node) -> &'a str {
    &content[node.start_byte()..node.end_byte()]
}
