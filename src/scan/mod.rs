//! Operator extraction
//!
//! Scans interpreter source for the case labels of its operator dispatch and
//! renders them as an inline HTML fragment for the documentation pages.

pub mod extractor;
pub mod operators;
pub mod scanner;

pub use extractor::OperatorExtractor;
pub use operators::{escape_html, OperatorList, OutputFormat, ScanReport};
pub use scanner::{scan, LineEvent, LineScanner, ScanState};
