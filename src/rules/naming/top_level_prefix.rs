use crate::docs::RuleDoc;
use crate::linter::{Finding, LintRule, PARSER_ONLY, Severity};
use crate::rules::helpers::{SEPARATOR, TOP_LEVEL_PREFIX};
use g4_lint_grammar::{Grammar, GrammarKind};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "top-level-prefix",
    category: "naming",
    description: "Prefixed rules in a main parser should be top-level `s_` rules",
    severity: "warning",
    why: r#"A main parser (one that imports `*_common` or `*Parser` grammars)
holds the top-level statements; feature-specific rules live in the
imported grammars. Prefixed rules declared in the main parser should
therefore be `s_` statement rules. Anything else usually belongs in
one of the imported grammars."#,
    bad_example: r#"parser grammar CiscoParser;

import Cisco_common;

if_shutdown : SHUTDOWN NEWLINE ;"#,
    good_example: r#"parser grammar CiscoParser;

import Cisco_common;

s_shutdown : SHUTDOWN NEWLINE ;"#,
};

/// Check that prefixed rules in a main parser use the top-level prefix
pub struct TopLevelPrefix;

impl LintRule for TopLevelPrefix {
    fn name(&self) -> &'static str {
        DOC.name
    }

    fn category(&self) -> &'static str {
        DOC.category
    }

    fn description(&self) -> &'static str {
        DOC.description
    }

    fn applies_to(&self) -> &'static [GrammarKind] {
        PARSER_ONLY
    }

    fn check(&self, grammar: &Grammar) -> Vec<Finding> {
        if !grammar.is_main_parser {
            return Vec::new();
        }

        grammar
            .rules
            .iter()
            .filter(|rule| {
                rule.name.contains(SEPARATOR)
                    && !rule.name.starts_with(SEPARATOR)
                    && !rule.name.starts_with(TOP_LEVEL_PREFIX)
            })
            .map(|rule| {
                self.finding(
                    &format!(
                        "Rule '{}' in a main parser should start with '{}'",
                        rule.name, TOP_LEVEL_PREFIX
                    ),
                    Severity::Warning,
                    rule.line,
                )
            })
            .collect()
    }
}
