use crate::docs::RuleDoc;
use crate::linter::{Finding, LEXER_ONLY, LintRule, Severity};
use g4_lint_grammar::{Grammar, GrammarKind};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "token-case",
    category: "naming",
    description: "Default-mode token names must be entirely uppercase",
    severity: "error",
    why: r#"Token names are written in UPPER_CASE so they are visually distinct
from parser rules (lowercase) and fragments (`F_Name`). A mixed-case
token is easily mistaken for a fragment."#,
    bad_example: r#"lexer grammar FooLexer;

Foo : 'foo' ;"#,
    good_example: r#"lexer grammar FooLexer;

FOO : 'foo' ;"#,
};

/// Check that root-mode token names are uppercase
pub struct TokenCase;

impl LintRule for TokenCase {
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
        LEXER_ONLY
    }

    fn check(&self, grammar: &Grammar) -> Vec<Finding> {
        grammar
            .tokens
            .iter()
            .filter(|token| token.name != token.name.to_uppercase())
            .map(|token| {
                self.finding(
                    &format!(
                        "Token '{}' must be entirely uppercase (expected '{}')",
                        token.name,
                        token.name.to_uppercase()
                    ),
                    Severity::Error,
                    token.line,
                )
            })
            .collect()
    }
}
