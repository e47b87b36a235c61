pub mod config;
pub mod dialects;
pub mod error;
pub mod scan;

use once_cell::sync::Lazy;

pub use config::Config;
pub use dialects::{ProfileRegistry, ScanProfile};
pub use error::{ExtractError, Result};
pub use scan::{
    escape_html, scan, LineEvent, LineScanner, OperatorExtractor, OperatorList, OutputFormat,
    ScanReport, ScanState,
};

/// Built-in profile registry (lazily initialized)
pub static REGISTRY: Lazy<ProfileRegistry> = Lazy::new(ProfileRegistry::new);
