use crate::docs::RuleDoc;
use crate::linter::{ALL_GRAMMARS, Finding, LintRule, Severity};
use g4_lint_grammar::{Grammar, GrammarKind};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "mode-token-prefix",
    category: "naming",
    description: "Tokens declared in a mode should be prefixed with the mode name",
    severity: "warning",
    why: r#"Tokens from different modes share one token namespace. Prefixing
each token with its mode name keeps them unique and tells the reader
which lexer context produces the token."#,
    bad_example: r#"lexer grammar FooLexer;

mode M_Description;

LINE : ~[\r\n]+ ;"#,
    good_example: r#"lexer grammar FooLexer;

mode M_Description;

M_Description_LINE : ~[\r\n]+ ;"#,
};

/// Check that mode-scoped tokens carry their mode name as a prefix
pub struct ModeTokenPrefix;

impl LintRule for ModeTokenPrefix {
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
        ALL_GRAMMARS
    }

    fn check(&self, grammar: &Grammar) -> Vec<Finding> {
        grammar
            .modes
            .iter()
            .flat_map(|mode| {
                mode.tokens
                    .iter()
                    .filter(|token| !token.name.starts_with(&mode.name))
                    .map(|token| {
                        self.finding(
                            &format!(
                                "Token '{}' in mode '{}' should be prefixed with '{}'",
                                token.name, mode.name, mode.name
                            ),
                            Severity::Warning,
                            token.line,
                        )
                    })
            })
            .collect()
    }
}
