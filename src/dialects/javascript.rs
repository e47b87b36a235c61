//! Bounded scan of the dynamically-typed interpreter source.
//!
//! The region opens at the `eval(sexpr)` entry point and closes at the
//! switch's `default:` branch. Labels carrying `_PROG` are helper forms.

use super::ScanProfile;

pub const START_MARKER: &str = "eval(sexpr)";
pub const END_MARKER: &str = "default:";
pub const EXCLUDE_MARKER: &str = "_PROG";

pub fn profile() -> ScanProfile {
    ScanProfile {
        name: "javascript".to_string(),
        extensions: vec!["js".to_string(), "mjs".to_string()],
        start_marker: START_MARKER.to_string(),
        end_marker: Some(END_MARKER.to_string()),
        case_marker: "case".to_string(),
        exclude_marker: Some(EXCLUDE_MARKER.to_string()),
        comment_marker: "//".to_string(),
        block_marker: None,
        quote: '"',
    }
}
