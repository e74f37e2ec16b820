// File: src/options.rs
// Purpose: Generation options parsing from route-generation.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{GenerationError, Result};

/// Default options file name, looked up in the project directory
pub const OPTIONS_FILE_NAME: &str = "route-generation.toml";

/// Options controlling the generated unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Name of the generated static class (default: "Routes")
    #[serde(default = "default_class_name")]
    pub class_name: String,

    /// Namespace of the generated class; falls back to the host identity
    #[serde(default)]
    pub namespace: Option<String>,

    /// Whether to emit `NavigationManager` extension functions (default: true)
    #[serde(default = "default_true")]
    pub generate_extensions: bool,

    /// Prefix prepended to navigation function names (default: "")
    #[serde(default)]
    pub extension_prefix: String,
}

fn default_class_name() -> String {
    "Routes".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            class_name: default_class_name(),
            namespace: None,
            generate_extensions: true,
            extension_prefix: String::new(),
        }
    }
}

impl GenerationOptions {
    /// Load options from a TOML file, best effort
    ///
    /// Missing, unreadable, empty or malformed files all yield the defaults.
    /// Generation must not fail because of the options document.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        // If file doesn't exist, return default options
        if !path.exists() {
            debug!("No options file at {:?}, using defaults", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                debug!("Failed to read options file {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Parse options from TOML content, best effort
    pub fn parse(content: &str) -> Self {
        // If content is empty, return default options
        if content.trim().is_empty() {
            return Self::default();
        }

        toml::from_str(content).unwrap_or_else(|e| {
            debug!("Failed to parse options: {}, using defaults", e);
            Self::default()
        })
    }

    /// Namespace from the options, else the host-provided identity
    ///
    /// Blank values count as missing. There is no built-in default: a wrong
    /// namespace would silently break every consumer.
    pub fn resolve_namespace(&self, host_identity: Option<&str>) -> Result<String> {
        let non_blank = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        self.namespace
            .as_deref()
            .and_then(non_blank)
            .or_else(|| host_identity.and_then(non_blank))
            .ok_or(GenerationError::MissingNamespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = GenerationOptions::default();
        assert_eq!(options.class_name, "Routes");
        assert_eq!(options.namespace, None);
        assert!(options.generate_extensions);
        assert_eq!(options.extension_prefix, "");
    }

    #[test]
    fn test_empty_options() {
        assert_eq!(GenerationOptions::parse(""), GenerationOptions::default());
        assert_eq!(GenerationOptions::parse("  \n "), GenerationOptions::default());
    }

    #[test]
    fn test_partial_options() {
        let toml = r#"
            class_name = "AppRoutes"
            extension_prefix = "GoTo"
        "#;
        let options = GenerationOptions::parse(toml);
        assert_eq!(options.class_name, "AppRoutes");
        assert_eq!(options.extension_prefix, "GoTo");
        assert!(options.generate_extensions);
        assert_eq!(options.namespace, None);
    }

    #[test]
    fn test_full_options() {
        let toml = r#"
            class_name = "Links"
            namespace = "My.App"
            generate_extensions = false
            extension_prefix = "NavigateTo"
        "#;
        let options = GenerationOptions::parse(toml);
        assert_eq!(
            options,
            GenerationOptions {
                class_name: "Links".to_string(),
                namespace: Some("My.App".to_string()),
                generate_extensions: false,
                extension_prefix: "NavigateTo".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_options_fall_back() {
        assert_eq!(
            GenerationOptions::parse("class_name = [1, 2"),
            GenerationOptions::default()
        );
        assert_eq!(
            GenerationOptions::parse("generate_extensions = \"yes\""),
            GenerationOptions::default()
        );
    }

    #[test]
    fn test_missing_file_falls_back() {
        let options = GenerationOptions::load("definitely/not/here/route-generation.toml");
        assert_eq!(options, GenerationOptions::default());
    }

    #[test]
    fn test_resolve_namespace() {
        let mut options = GenerationOptions::default();
        assert_eq!(options.resolve_namespace(Some("Host")), Ok("Host".to_string()));
        assert_eq!(
            options.resolve_namespace(None),
            Err(GenerationError::MissingNamespace)
        );
        assert_eq!(
            options.resolve_namespace(Some("  ")),
            Err(GenerationError::MissingNamespace)
        );

        options.namespace = Some(" ".to_string());
        assert_eq!(options.resolve_namespace(Some("Host")), Ok("Host".to_string()));

        options.namespace = Some("Configured".to_string());
        assert_eq!(
            options.resolve_namespace(Some("Host")),
            Ok("Configured".to_string())
        );
    }
}
