pub mod javascript;
pub mod typescript;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

fn default_case_marker() -> String {
    "case".to_string()
}

fn default_comment_marker() -> String {
    "//".to_string()
}

fn default_quote() -> char {
    '"'
}

/// Literal markers that drive one scan of a dispatch region.
///
/// A profile without an `end_marker` scans from the start marker to the end
/// of the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanProfile {
    /// Registry key; filled from the table name when loaded from config
    #[serde(default)]
    pub name: String,
    /// File extensions (without the dot) that select this profile
    #[serde(default)]
    pub extensions: Vec<String>,
    pub start_marker: String,
    #[serde(default)]
    pub end_marker: Option<String>,
    #[serde(default = "default_case_marker")]
    pub case_marker: String,
    #[serde(default)]
    pub exclude_marker: Option<String>,
    #[serde(default = "default_comment_marker")]
    pub comment_marker: String,
    /// Text at or after this marker is dropped before matching
    #[serde(default)]
    pub block_marker: Option<String>,
    #[serde(default = "default_quote")]
    pub quote: char,
}

impl ScanProfile {
    pub fn is_bounded(&self) -> bool {
        self.end_marker.is_some()
    }
}

#[derive(Clone)]
pub struct ProfileRegistry {
    profiles: HashMap<String, Arc<ScanProfile>>,
    extension_map: HashMap<String, String>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            profiles: HashMap::new(),
            extension_map: HashMap::new(),
        };

        registry.register(javascript::profile());
        registry.register(typescript::profile());

        registry
    }

    /// Adds a profile, replacing any existing one with the same name.
    pub fn register(&mut self, profile: ScanProfile) {
        let name = profile.name.clone();
        if let Some(previous) = self.profiles.get(&name) {
            for ext in &previous.extensions {
                if self.extension_map.get(ext) == Some(&name) {
                    self.extension_map.remove(ext);
                }
            }
        }
        for ext in &profile.extensions {
            self.extension_map.insert(ext.clone(), name.clone());
        }
        self.profiles.insert(name, Arc::new(profile));
    }

    pub fn get_by_name(&self, name: &str) -> Option<Arc<ScanProfile>> {
        self.profiles.get(name).cloned()
    }

    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<ScanProfile>> {
        self.extension_map
            .get(ext)
            .and_then(|name| self.profiles.get(name))
            .cloned()
    }

    pub fn get_for_file(&self, path: &Path) -> Option<Arc<ScanProfile>> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.get_by_extension(ext))
    }

    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}
