use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::dialects::{ProfileRegistry, ScanProfile};
use crate::error::{ExtractError, Result};

use super::operators::{OperatorList, ScanReport};
use super::scanner;

/// Reads a source file and pulls the operator list out of its dispatch region
pub struct OperatorExtractor {
    profile: Arc<ScanProfile>,
}

impl OperatorExtractor {
    pub fn new(profile: Arc<ScanProfile>) -> Self {
        Self { profile }
    }

    /// Picks the profile by explicit name, falling back to the file extension.
    pub fn for_file(registry: &ProfileRegistry, path: &Path, profile: Option<&str>) -> Result<Self> {
        let profile = match profile {
            Some(name) => registry
                .get_by_name(name)
                .ok_or_else(|| ExtractError::UnknownProfile(name.to_string()))?,
            None => registry
                .get_for_file(path)
                .ok_or_else(|| ExtractError::NoProfileForFile(path.display().to_string()))?,
        };

        Ok(Self::new(profile))
    }

    pub fn profile(&self) -> &ScanProfile {
        &self.profile
    }

    pub fn extract_str(&self, content: &str) -> OperatorList {
        scanner::scan(content, &self.profile)
    }

    pub fn extract_file(&self, path: &Path) -> Result<OperatorList> {
        // Read fully up front; the handle is closed before scanning starts
        let content = fs::read_to_string(path).map_err(|source| ExtractError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let list = self.extract_str(&content);
        tracing::info!(
            "extracted {} operators from {} using profile {}",
            list.len(),
            path.display(),
            self.profile.name
        );

        Ok(list)
    }

    pub fn report(&self, path: &Path) -> Result<ScanReport> {
        let list = self.extract_file(path)?;
        Ok(ScanReport {
            source: path.display().to_string(),
            profile: self.profile.name.clone(),
            operators: list.operators().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_for_file_by_extension() {
        let registry = ProfileRegistry::new();
        let extractor = OperatorExtractor::for_file(&registry, Path::new("a/weblisp.ts"), None).unwrap();
        assert_eq!(extractor.profile().name, "typescript");
    }

    #[test]
    fn test_for_file_explicit_profile_wins() {
        let registry = ProfileRegistry::new();
        let extractor =
            OperatorExtractor::for_file(&registry, Path::new("weblisp.ts"), Some("javascript")).unwrap();
        assert_eq!(extractor.profile().name, "javascript");
    }

    #[test]
    fn test_for_file_errors() {
        let registry = ProfileRegistry::new();

        let err = OperatorExtractor::for_file(&registry, Path::new("x.js"), Some("cobol"))
            .err()
            .unwrap();
        assert!(matches!(err, ExtractError::UnknownProfile(ref n) if n == "cobol"));

        let err = OperatorExtractor::for_file(&registry, Path::new("notes.txt"), None)
            .err()
            .unwrap();
        assert!(matches!(err, ExtractError::NoProfileForFile(_)));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let registry = ProfileRegistry::new();
        let path = PathBuf::from("/definitely/not/here/weblisp.js");
        let extractor = OperatorExtractor::for_file(&registry, &path, None).unwrap();

        let err = extractor.extract_file(&path).unwrap_err();
        match err {
            ExtractError::Unreadable { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
