//! Formatting configuration for tdgen

use crate::error::{Result, TdgenError};
use serde::{Deserialize, Serialize};

/// Turns a nesting depth and a line of text into an indented line
pub trait Indent {
    /// Indent `text` for nesting depth `level`
    fn indent(&self, level: usize, text: &str) -> String;
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output formatting settings
    pub format: Options,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| TdgenError::Config(e.to_string()))
    }

    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<()> {
        if self.format.tab_width == 0 {
            return Err(TdgenError::Config(
                "format.tab_width must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Output formatting options handed to every renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Spaces per nesting level
    pub tab_width: usize,
    /// Sort namespace children alphabetically
    pub sort_namespaces: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tab_width: 2,
            sort_namespaces: false,
        }
    }
}

impl Options {
    /// Create options with explicit values
    pub fn new(tab_width: usize, sort_namespaces: bool) -> Self {
        Self {
            tab_width,
            sort_namespaces,
        }
    }

    /// Prefix `text` with `level * tab_width` spaces
    pub fn indented(&self, level: usize, text: &str) -> String {
        let mut line = " ".repeat(level * self.tab_width);
        line.push_str(text);
        line
    }
}

impl Indent for Options {
    fn indent(&self, level: usize, text: &str) -> String {
        self.indented(level, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert_eq!(options.tab_width, 2);
        assert!(!options.sort_namespaces);
    }

    #[test]
    fn test_indented() {
        let options = Options::default();
        assert_eq!(options.indented(0, "foo"), "foo");
        assert_eq!(options.indented(2, "foo"), "    foo");

        let wide = Options::new(4, false);
        assert_eq!(wide.indent(1, "bar"), "    bar");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml_string().unwrap();
        assert!(toml.contains("[format]"));
        assert!(toml.contains("tab_width = 2"));

        let config2 = Config::from_toml_str(&toml).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml_str("[format]\ntab_width = 4\n").unwrap();
        assert_eq!(config.format.tab_width, 4);
        assert!(!config.format.sort_namespaces);

        let empty = Config::from_toml_str("").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_zero_tab_width_rejected() {
        let err = Config::from_toml_str("[format]\ntab_width = 0\n").unwrap_err();
        assert!(matches!(err, TdgenError::Config(_)));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = Config::from_toml_str("[format]\ntab_width = \"wide\"\n").unwrap_err();
        assert!(matches!(err, TdgenError::Toml(_)));
    }
}
