//! Extracted operator list and its HTML rendering

use std::collections::BTreeSet;

use serde::Serialize;

const SEPARATOR: &str = ", ";
const OPEN_TAG: &str = "<code>";
const CLOSE_TAG: &str = "</code>";

/// Replaces `<` and `>` with their HTML entities. Nothing else is escaped.
pub fn escape_html(name: &str) -> String {
    name.replace('<', "&lt;").replace('>', "&gt;")
}

/// Output format for a finished scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Inline `<code>` fragment
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" | "html" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Operator names collected from a dispatch region.
///
/// Names are stored already escaped, unique, and in ascending ordinal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorList {
    operators: Vec<String>,
}

impl OperatorList {
    /// Freezes discovered names: escapes, deduplicates and sorts them.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<String> = names
            .into_iter()
            .map(|n| escape_html(n.as_ref()))
            .filter(|n| !n.is_empty())
            .collect();

        Self {
            operators: unique.into_iter().collect(),
        }
    }

    pub fn operators(&self) -> &[String] {
        &self.operators
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Renders `<code>a</code>, <code>b</code>`; empty list renders as "".
    pub fn to_html(&self) -> String {
        self.operators
            .iter()
            .map(|op| format!("{OPEN_TAG}{op}{CLOSE_TAG}"))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

/// JSON shape of a scan result
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub source: String,
    pub profile: String,
    pub operators: Vec<String>,
}
