//! Run configuration.
//!
//! g4-lint has no configuration file: everything comes from command-line
//! flags and is collected here before the linter is built.

use crate::docs::all_rule_names;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, Default)]
pub struct LintConfig {
    disabled_rules: BTreeSet<String>,
    color: ColorMode,
}

/// Color mode for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Automatically detect (default) - respects NO_COLOR env and terminal detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown rule '{name}' (available rules: {available})")]
    UnknownRule { name: String, available: String },
}

impl LintConfig {
    /// Disable a rule by name
    pub fn disable(&mut self, name: &str) -> Result<(), ConfigError> {
        let known = all_rule_names();
        if !known.contains(&name) {
            return Err(ConfigError::UnknownRule {
                name: name.to_string(),
                available: known.join(", "),
            });
        }
        self.disabled_rules.insert(name.to_string());
        Ok(())
    }

    /// Check if a rule is enabled
    pub fn is_rule_enabled(&self, name: &str) -> bool {
        !self.disabled_rules.contains(name)
    }

    pub fn disabled_rules(&self) -> impl Iterator<Item = &str> {
        self.disabled_rules.iter().map(String::as_str)
    }

    pub fn with_color_mode(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Apply the color mode to the global `colored` override
    pub fn apply_color_mode(&self) {
        match self.color {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LintConfig::default();
        assert!(config.is_rule_enabled("token-case"));
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_disable_rule() {
        let mut config = LintConfig::default();
        config.disable("first-token-ambiguity").unwrap();
        assert!(!config.is_rule_enabled("first-token-ambiguity"));
        assert!(config.is_rule_enabled("token-case"));
        assert_eq!(
            config.disabled_rules().collect::<Vec<_>>(),
            vec!["first-token-ambiguity"]
        );
    }

    #[test]
    fn test_disable_unknown_rule() {
        let mut config = LintConfig::default();
        let err = config.disable("no-such-rule").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown rule 'no-such-rule'"));
        assert!(message.contains("token-case"));
    }

    #[test]
    fn test_with_color_mode() {
        let config = LintConfig::default().with_color_mode(ColorMode::Never);
        assert_eq!(config.color, ColorMode::Never);
    }
}
