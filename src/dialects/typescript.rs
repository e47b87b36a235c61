//! Unbounded scan of the statically-typed interpreter source.
//!
//! Once the typed `eval(sexpr: SExpr` signature is seen, scanning runs to the
//! end of the file. Lines are cut at `{` so braces opening a case body never
//! reach the label matcher. Tilde-suffixed labels (`APPEND~`) are internal.

use super::ScanProfile;

pub const START_MARKER: &str = "eval(sexpr: SExpr";
pub const EXCLUDE_MARKER: &str = "~";

pub fn profile() -> ScanProfile {
    ScanProfile {
        name: "typescript".to_string(),
        extensions: vec!["ts".to_string()],
        start_marker: START_MARKER.to_string(),
        end_marker: None,
        case_marker: "case".to_string(),
        exclude_marker: Some(EXCLUDE_MARKER.to_string()),
        comment_marker: "//".to_string(),
        block_marker: Some("{".to_string()),
        quote: '"',
    }
}
