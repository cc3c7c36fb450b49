//! Configuration management for reindent.
//!
//! This module provides the [`Config`] struct which controls indentation
//! behavior. Configuration can be loaded from:
//! - TOML files (`reindent.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching parent directories from the
//! file being reindented up to the filesystem root, plus the user's home
//! directory.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["reindent.toml"];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    // Try HOME environment variable first (works on Unix and some Windows setups)
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_indent() -> usize {
    4
}

/// Which rule table the scanner runs with.
///
/// `Script` covers brace-and-bracket sources (JavaScript, CSS, JSON and
/// relatives). `Markup` covers tag-structured sources (HTML, XML, SVG) and
/// layers the script rules underneath so embedded scripts and styles still
/// indent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    Script,
    Markup,
}

impl Syntax {
    /// Map a file extension (without the dot, case-insensitive) to a syntax.
    ///
    /// Returns `None` for extensions reindent does not recognize.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "mjs" | "cjs" | "jsx" | "ts" | "css" | "scss" | "less" | "json" => {
                Some(Syntax::Script)
            }
            "html" | "htm" | "xhtml" | "xml" | "svg" | "vue" => Some(Syntax::Markup),
            _ => None,
        }
    }
}

impl FromStr for Syntax {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "script" => Ok(Syntax::Script),
            "markup" => Ok(Syntax::Markup),
            other => Err(format!(
                "unknown syntax '{other}' (expected 'script' or 'markup')"
            )),
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Syntax::Script => write!(f, "script"),
            Syntax::Markup => write!(f, "markup"),
        }
    }
}

/// Main configuration struct for reindent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of spaces per indent level (default: 4)
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Indent with one tab per level instead of spaces (default: false)
    #[serde(default)]
    pub use_tabs: bool,

    /// Force a syntax instead of detecting it from the file extension
    #[serde(default)]
    pub syntax: Option<Syntax>,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub indent: Option<usize>,
    pub use_tabs: Option<bool>,
    pub syntax: Option<Syntax>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent: 4,
            use_tabs: false,
            syntax: None,
        }
    }
}

impl Config {
    /// Maximum reasonable indent size
    const MAX_INDENT: usize = 16;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.indent == 0 {
            return Some("indent must be at least 1".to_string());
        }
        if self.indent > Self::MAX_INDENT {
            return Some(format!(
                "indent {} exceeds maximum of {}",
                self.indent,
                Self::MAX_INDENT
            ));
        }
        None
    }

    /// The string written once per indent level.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent)
        }
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.indent {
            self.indent = v;
        }
        if let Some(v) = partial.use_tabs {
            self.use_tabs = v;
        }
        if let Some(v) = partial.syntax {
            self.syntax = Some(v);
        }
    }

    /// Discover config files from parent directories of a given path
    ///
    /// Searches from the file's directory up to the root, then adds home
    /// directory config. Returns list of config file paths in order of
    /// priority (least specific first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Add home directory config first (lowest priority)
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        // Start from the file's parent directory (or the path itself if it's a directory)
        let start_dir = if start_path.is_file() {
            start_path.parent().map(Path::to_path_buf)
        } else if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            // Path doesn't exist, use current directory
            std::env::current_dir().ok()
        };

        // Collect config files from parent directories (from root to current)
        if let Some(dir) = start_dir {
            let mut ancestors: Vec<PathBuf> = dir.ancestors().map(Path::to_path_buf).collect();
            // Reverse so we go from root to current (less specific to more specific)
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Returns default config if no files found.
    #[must_use]
    pub fn from_discovered_files(start_path: &Path) -> Self {
        let config_files = Self::discover_config_files(start_path);

        if config_files.is_empty() {
            return Self::default();
        }

        let mut config = Self::default();
        for path in &config_files {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(&partial),
                    Err(e) => eprintln!("Warning: failed to parse {}: {e}", path.display()),
                },
                Err(e) => eprintln!("Warning: failed to read {}: {e}", path.display()),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.indent, 4);
        assert!(!config.use_tabs);
        assert!(config.syntax.is_none());
    }

    #[test]
    fn test_indent_unit_spaces() {
        let config = Config {
            indent: 2,
            ..Default::default()
        };
        assert_eq!(config.indent_unit(), "  ");
    }

    #[test]
    fn test_indent_unit_tabs() {
        let config = Config {
            use_tabs: true,
            ..Default::default()
        };
        assert_eq!(config.indent_unit(), "\t");
    }

    #[test]
    fn test_syntax_from_extension() {
        assert_eq!(Syntax::from_extension("js"), Some(Syntax::Script));
        assert_eq!(Syntax::from_extension("ts"), Some(Syntax::Script));
        assert_eq!(Syntax::from_extension("css"), Some(Syntax::Script));
        assert_eq!(Syntax::from_extension("json"), Some(Syntax::Script));
        assert_eq!(Syntax::from_extension("html"), Some(Syntax::Markup));
        assert_eq!(Syntax::from_extension("XML"), Some(Syntax::Markup));
        assert_eq!(Syntax::from_extension("svg"), Some(Syntax::Markup));
        assert_eq!(Syntax::from_extension("rs"), None);
        assert_eq!(Syntax::from_extension(""), None);
    }

    #[test]
    fn test_syntax_from_str() {
        assert_eq!("script".parse::<Syntax>(), Ok(Syntax::Script));
        assert_eq!("Markup".parse::<Syntax>(), Ok(Syntax::Markup));
        assert!("plaintext".parse::<Syntax>().is_err());
    }

    #[test]
    fn test_config_apply_partial() {
        let mut base = Config::default();

        // Only set indent, leave others as None
        let partial = PartialConfig {
            indent: Some(2),
            ..Default::default()
        };

        base.apply_partial(&partial);
        assert_eq!(base.indent, 2);
        // Other fields should remain at defaults
        assert!(!base.use_tabs);
        assert!(base.syntax.is_none());
    }

    #[test]
    fn test_config_apply_partial_preserves_unset() {
        let mut base = Config::default();
        base.use_tabs = true;

        let partial = PartialConfig {
            indent: Some(8),
            ..Default::default()
        };

        base.apply_partial(&partial);
        // use_tabs should be preserved (not reset to default)
        assert!(base.use_tabs);
        assert_eq!(base.indent, 8);
    }

    #[test]
    fn test_parse_toml_syntax() {
        let partial: PartialConfig = toml::from_str("syntax = \"markup\"\nindent = 2\n").unwrap();
        assert_eq!(partial.syntax, Some(Syntax::Markup));
        assert_eq!(partial.indent, Some(2));
        assert!(partial.use_tabs.is_none());
    }

    #[test]
    fn test_discover_config_files_nonexistent_path() {
        // Discovery from a path that doesn't exist should not panic
        let path = PathBuf::from("/nonexistent/path/file.js");
        let _files = Config::discover_config_files(&path);
    }

    #[test]
    fn test_from_discovered_files_returns_default_when_empty() {
        let path = PathBuf::from("/nonexistent/unique/path/file.js");
        let config = Config::from_discovered_files(&path);
        assert_eq!(config.indent, 4);
        assert!(!config.use_tabs);
    }

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(config.validate().is_none(), "Default config should be valid");
    }

    #[test]
    fn test_validate_indent_zero() {
        let config = Config {
            indent: 0,
            ..Default::default()
        };
        assert!(config.validate().is_some());
        assert!(config.validate().unwrap().contains("indent"));
    }

    #[test]
    fn test_validate_indent_too_large() {
        let config = Config {
            indent: 100,
            ..Default::default()
        };
        assert!(config.validate().is_some());
    }
}
