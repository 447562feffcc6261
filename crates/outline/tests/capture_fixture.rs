//! Captures arrive from an external boundary-detection facility; this
//! exercises the wire shape end to end.

use codeskim_outline::{Capture, OutlineExtractor, SourceFile};
use pretty_assertions::assert_eq;

const TS_SOURCE: &str = r#"// Session keeps one connection alive.
import { Socket } from "./socket";

export class Session
    extends Emitter {
  send(frame: Frame): void {
    this.socket.write(frame);
  }
}

export const connect = async (url: string) => {
  return new Session(url);
};
"#;

const TS_CAPTURES: &str = r#"[
  {"label": "comment", "start_row": 0, "end_row": 0},
  {"label": "definition.import", "start_row": 1, "end_row": 1},
  {"label": "definition.class", "start_row": 3, "end_row": 8},
  {"label": "definition.method", "start_row": 5, "end_row": 7},
  {"label": "definition.function", "start_row": 10, "end_row": 12},
  {"label": "definition.function", "start_row": 10, "end_row": 12}
]"#;

#[test]
fn json_captures_drive_the_brace_strategy() {
    let captures: Vec<Capture> = serde_json::from_str(TS_CAPTURES).unwrap();
    let file = SourceFile::new("session.ts", TS_SOURCE);

    let extractor = OutlineExtractor::default();
    let outline = extractor.outline_from_captures(&file, &captures);

    assert_eq!(
        outline.lines(),
        [
            "// Session keeps one connection alive.",
            "import { Socket } from \"./socket\";",
            "export class Session",
            "    extends Emitter",
            "send(frame: Frame): void",
            "export const connect = async (url: string)",
        ]
    );
}

#[test]
fn out_of_range_captures_contribute_nothing() {
    let captures = vec![
        Capture::new("definition.function", 500, 510),
        Capture::new("comment", 0, 0),
    ];
    let file = SourceFile::new("session.ts", TS_SOURCE);

    let extractor = OutlineExtractor::default();
    let outline = extractor.outline_from_captures(&file, &captures);

    assert_eq!(outline.lines(), ["// Session keeps one connection alive."]);
}
