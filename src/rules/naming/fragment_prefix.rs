use crate::docs::RuleDoc;
use crate::linter::{Finding, LEXER_ONLY, LintRule, Severity};
use crate::rules::helpers::FRAGMENT_PREFIX;
use g4_lint_grammar::{Grammar, GrammarKind};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "fragment-prefix",
    category: "naming",
    description: "Fragments should be named `F_` followed by a capitalized name",
    severity: "warning",
    why: r#"Fragments never produce tokens on their own. Naming them `F_Name`
makes it obvious at every use site that the reference is a helper
and not a token the parser can see."#,
    bad_example: r#"lexer grammar FooLexer;

fragment DIGIT : [0-9] ;
fragment F_digit : [0-9] ;"#,
    good_example: r#"lexer grammar FooLexer;

fragment F_Digit : [0-9] ;"#,
};

/// Check fragment naming
pub struct FragmentPrefix;

impl LintRule for FragmentPrefix {
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
        let mut findings = Vec::new();

        for fragment in &grammar.fragments {
            let Some(rest) = fragment.name.strip_prefix(FRAGMENT_PREFIX) else {
                findings.push(self.finding(
                    &format!(
                        "Fragment '{}' should start with '{}'",
                        fragment.name, FRAGMENT_PREFIX
                    ),
                    Severity::Warning,
                    fragment.line,
                ));
                continue;
            };

            let capitalized = rest.starts_with(|c: char| c.is_ascii_uppercase());
            let has_letter = rest.chars().any(|c| c.is_ascii_alphabetic());
            if !capitalized || !has_letter {
                findings.push(self.finding(
                    &format!(
                        "Fragment '{}' should continue with a capitalized name after '{}' (e.g. 'F_Digit')",
                        fragment.name, FRAGMENT_PREFIX
                    ),
                    Severity::Warning,
                    fragment.line,
                ));
            }
        }

        findings
    }
}
