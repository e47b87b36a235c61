//! Profile configuration file
//!
//! Extra scan profiles are declared as TOML tables under `[profiles.<name>]`
//! and layered over the built-in registry.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::dialects::{ProfileRegistry, ScanProfile};
use crate::error::{ExtractError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub profiles: BTreeMap<String, ScanProfile>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ExtractError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;

        for (name, profile) in config.profiles.iter_mut() {
            validate(name, profile)?;
            profile.name = name.clone();
        }

        Ok(config)
    }

    /// Built-in profiles with this config's profiles registered on top
    pub fn registry(&self) -> ProfileRegistry {
        let mut registry = ProfileRegistry::new();
        for profile in self.profiles.values() {
            tracing::debug!("registering profile {} from config", profile.name);
            registry.register(profile.clone());
        }
        registry
    }
}

/// Every marker that is set must be non-empty; `contains("")` matches any line.
fn validate(name: &str, profile: &ScanProfile) -> Result<()> {
    let markers = [
        ("start_marker", Some(profile.start_marker.as_str())),
        ("case_marker", Some(profile.case_marker.as_str())),
        ("end_marker", profile.end_marker.as_deref()),
        ("exclude_marker", profile.exclude_marker.as_deref()),
    ];

    for (field, value) in markers {
        if value == Some("") {
            return Err(ExtractError::Config(format!(
                "profile '{name}' has an empty {field}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_profile_with_defaults() {
        let content = r#"
[profiles.lua]
extensions = ["lua"]
start_marker = "function dispatch("
end_marker = "else"
comment_marker = "--"
"#;

        let config = Config::parse(content).unwrap();
        let lua = config.profiles.get("lua").unwrap();

        assert_eq!(lua.name, "lua");
        assert_eq!(lua.case_marker, "case");
        assert_eq!(lua.quote, '"');
        assert_eq!(lua.comment_marker, "--");
        assert!(lua.exclude_marker.is_none());
        assert!(lua.block_marker.is_none());
        assert!(lua.is_bounded());
    }

    #[test]
    fn test_registry_layers_config_over_builtins() {
        let content = r#"
[profiles.typescript]
extensions = ["ts", "tsx"]
start_marker = "eval(sexpr"
end_marker = "default:"

[profiles.lua]
extensions = ["lua"]
start_marker = "function dispatch("
"#;

        let registry = Config::parse(content).unwrap().registry();

        let ts = registry.get_for_file(Path::new("weblisp.tsx")).unwrap();
        assert_eq!(ts.name, "typescript");
        assert!(ts.is_bounded());
        assert_eq!(registry.get_for_file(Path::new("ops.lua")).unwrap().name, "lua");
        assert_eq!(registry.get_for_file(Path::new("weblisp.js")).unwrap().name, "javascript");
        assert_eq!(registry.profile_names(), vec!["javascript", "lua", "typescript"]);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let content = r#"
[profiles.bad]
start_marker = "x"
stop_marker = "y"
"#;
        assert!(matches!(Config::parse(content), Err(ExtractError::ConfigParse(_))));
    }

    #[test]
    fn test_empty_start_marker_rejected() {
        let content = r#"
[profiles.bad]
start_marker = ""
"#;
        assert!(matches!(Config::parse(content), Err(ExtractError::Config(_))));
    }

    #[test]
    fn test_empty_exclude_marker_rejected() {
        let content = r#"
[profiles.bad]
start_marker = "eval(sexpr)"
exclude_marker = ""
"#;
        let err = Config::parse(content).unwrap_err();
        assert!(matches!(err, ExtractError::Config(ref m) if m.contains("exclude_marker")));
    }

    #[test]
    fn test_empty_end_marker_rejected() {
        let content = r#"
[profiles.bad]
start_marker = "eval(sexpr)"
end_marker = ""
"#;
        let err = Config::parse(content).unwrap_err();
        assert!(matches!(err, ExtractError::Config(ref m) if m.contains("end_marker")));
    }

    #[test]
    fn test_empty_case_marker_rejected() {
        let content = r#"
[profiles.bad]
start_marker = "eval(sexpr)"
case_marker = ""
"#;
        assert!(matches!(Config::parse(content), Err(ExtractError::Config(_))));
    }

    #[test]
    fn test_set_markers_still_scan() {
        let content = r#"
[profiles.ok]
start_marker = "eval(sexpr)"
end_marker = "default:"
exclude_marker = "_PROG"
"#;
        let config = Config::parse(content).unwrap();
        let profile = config.profiles.get("ok").unwrap();
        let list = crate::scan::scan("eval(sexpr) {\ncase \"CAR\":\ndefault:\n", profile);
        assert_eq!(list.operators(), &["CAR"]);
    }

    #[test]
    fn test_missing_file_keeps_io_source() {
        let err = Config::load(Path::new("/definitely/not/here/profiles.toml")).unwrap_err();
        match err {
            ExtractError::ConfigRead { ref path, ref source } => {
                assert!(path.ends_with("profiles.toml"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            ref other => panic!("unexpected error: {other}"),
        }
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_empty_config() {
        let config = Config::parse("").unwrap();
        assert!(config.profiles.is_empty());
        assert_eq!(config.registry().profile_names(), vec!["javascript", "typescript"]);
    }
}
