use crate::config::LintConfig;
use g4_lint_grammar::{Grammar, GrammarKind};
use serde::Serialize;

/// Rule categories, in display order
pub const RULE_CATEGORIES: &[&str] = &["naming", "structure", "style"];

/// Batteries a rule can belong to
pub const PARSER_ONLY: &[GrammarKind] = &[GrammarKind::Parser];
pub const LEXER_ONLY: &[GrammarKind] = &[GrammarKind::Lexer];
pub const ALL_GRAMMARS: &[GrammarKind] = &[GrammarKind::Parser, GrammarKind::Lexer];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// A single convention violation found in a grammar file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule: String,
    pub category: String,
    pub message: String,
    pub severity: Severity,
    pub line: Option<usize>,
}

impl Finding {
    pub fn new(rule: &str, category: &str, message: &str, severity: Severity) -> Self {
        Self {
            rule: rule.to_string(),
            category: category.to_string(),
            message: message.to_string(),
            severity,
            line: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

pub trait LintRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn category(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Grammar kinds whose battery includes this rule
    fn applies_to(&self) -> &'static [GrammarKind];

    fn check(&self, grammar: &Grammar) -> Vec<Finding>;

    /// Build a finding attributed to this rule
    fn finding(&self, message: &str, severity: Severity, line: usize) -> Finding {
        Finding::new(self.name(), self.category(), message, severity).with_line(line)
    }
}

pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
}

impl Linter {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_default_rules() -> Self {
        Self::with_config(None)
    }

    pub fn with_config(config: Option<&LintConfig>) -> Self {
        use crate::rules::{
            CircularImport, DeclarationGrouping, DeclarationOrder, FirstTokenAmbiguity,
            FragmentPrefix, KeywordOrder, ModeTokenPrefix, NewlineInParent, NullSuffix,
            ParserRuleCase, TokenCase, TopLevelPrefix,
        };

        let mut linter = Self::new();

        let is_enabled = |name: &str| config.map(|c| c.is_rule_enabled(name)).unwrap_or(true);

        let all: Vec<Box<dyn LintRule>> = vec![
            // Naming rules
            Box::new(ParserRuleCase),
            Box::new(TopLevelPrefix),
            Box::new(TokenCase),
            Box::new(FragmentPrefix),
            Box::new(ModeTokenPrefix),
            // Structure rules
            Box::new(NullSuffix),
            Box::new(NewlineInParent),
            Box::new(CircularImport),
            Box::new(KeywordOrder),
            // Style rules
            Box::new(FirstTokenAmbiguity),
            Box::new(DeclarationOrder),
            Box::new(DeclarationGrouping),
        ];

        for rule in all {
            if is_enabled(rule.name()) {
                linter.add_rule(rule);
            }
        }

        linter
    }

    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Get a reference to all rules
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Run the battery matching the grammar's kind and collect findings.
    ///
    /// A grammar without a `parser grammar` or `lexer grammar` marker runs no
    /// battery and yields nothing.
    pub fn lint(&self, grammar: &Grammar) -> Vec<Finding> {
        let Some(kind) = grammar.kind else {
            tracing::debug!(path = %grammar.path.display(), "no grammar kind marker, skipping");
            return Vec::new();
        };

        tracing::debug!(path = %grammar.path.display(), kind = %kind, "running battery");
        self.rules
            .iter()
            .filter(|rule| rule.applies_to().contains(&kind))
            .flat_map(|rule| rule.check(grammar))
            .collect()
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use g4_lint_grammar::parse_string;

    #[test]
    fn test_no_marker_no_findings() {
        let grammar = parse_string("Foo.g4", "grammar Foo;\nBadName : X ;\nfooBar : Y ;\n");
        assert!(!grammar.rules.is_empty());
        let findings = Linter::with_default_rules().lint(&grammar);
        assert!(findings.is_empty(), "Expected no findings, got: {:?}", findings);
    }

    #[test]
    fn test_parser_battery_only_runs_parser_rules() {
        let grammar = parse_string("P.g4", "parser grammar P;\nfooBar : X ;\n");
        let findings = Linter::with_default_rules().lint(&grammar);
        assert!(findings.iter().any(|f| f.rule == "parser-rule-case"));
        assert!(findings.iter().all(|f| f.rule != "token-case"));
    }

    #[test]
    fn test_lexer_battery_skips_parser_checks() {
        // A parser rule in a lexer grammar is not checked by the lexer battery.
        let grammar = parse_string("L.g4", "lexer grammar L;\nfooBar : X ;\nFoo : 'foo' ;\n");
        let findings = Linter::with_default_rules().lint(&grammar);
        let rules: Vec<_> = findings.iter().map(|f| f.rule.as_str()).collect();
        assert_eq!(rules, vec!["token-case"]);
    }

    #[test]
    fn test_disabled_rule_not_loaded() {
        let mut config = LintConfig::default();
        config.disable("declaration-order").unwrap();
        let linter = Linter::with_config(Some(&config));
        assert!(linter.rules().iter().all(|r| r.name() != "declaration-order"));
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "ERROR");
        assert_eq!(Severity::Warning.to_string(), "WARNING");
    }
}
