use crate::docs::RuleDoc;
use crate::linter::{Finding, LintRule, PARSER_ONLY, Severity};
use crate::rules::helpers::{LINE_TERMINATOR, real_references, strip_noise};
use g4_lint_grammar::{Grammar, GrammarKind};
use regex::Regex;
use std::sync::LazyLock;

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "newline-in-parent",
    category: "structure",
    description: "NEWLINE belongs in leaf rules, not after a group of child rules",
    severity: "error",
    why: r#"When a parent rule dispatches to child rules and then matches
NEWLINE itself, each child has to stop just before the end of the line.
Children that consume "the rest of the line" then steal the NEWLINE
and the parent fails to match. Every leaf should consume its own
NEWLINE instead."#,
    bad_example: r#"parser grammar Foo_interface;

if_stanza
:
   (
      if_description
      | if_shutdown
   ) NEWLINE
;"#,
    good_example: r#"parser grammar Foo_interface;

if_stanza
:
   if_description
   | if_shutdown
;

if_shutdown : SHUTDOWN NEWLINE ;"#,
};

static GROUPED_INVOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^()]*\b[a-z][A-Za-z0-9_]*\b").unwrap());

static GROUP_THEN_TERMINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\)[*+?]?\s*{}\s*;?\s*$", LINE_TERMINATOR)).unwrap()
});

/// Check that parent rules do not consume the line terminator
pub struct NewlineInParent;

impl LintRule for NewlineInParent {
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
        grammar
            .rules
            .iter()
            .filter(|rule| {
                let body = strip_noise(rule.body());
                let parent_like = body.contains('|') || GROUPED_INVOCATION.is_match(&body);
                parent_like
                    && GROUP_THEN_TERMINATOR.is_match(body.trim_end())
                    && !real_references(rule).is_empty()
            })
            .map(|rule| {
                self.finding(
                    &format!(
                        "Rule '{}' matches {} after a group of child rules; move {} into the leaf rules",
                        rule.name, LINE_TERMINATOR, LINE_TERMINATOR
                    ),
                    Severity::Error,
                    rule.line,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use g4_lint_grammar::parse_string;

    fn check(text: &str) -> Vec<Finding> {
        NewlineInParent.check(&parse_string("Foo_interface.g4", text))
    }

    #[test]
    fn test_parent_with_trailing_newline() {
        let text = r#"parser grammar Foo_interface;

if_stanza
:
   (
      if_description
      | if_shutdown
   ) NEWLINE // end of line
;
"#;
        let findings = check(text);
        assert_eq!(findings.len(), 1, "Expected 1 finding, got: {:?}", findings);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].line, Some(3));
    }

    #[test]
    fn test_quantified_group() {
        let text = "parser grammar P;\nif_list : (if_a if_b)* NEWLINE ;\n";
        assert_eq!(check(text).len(), 1);
    }

    #[test]
    fn test_leaf_rules_are_fine() {
        let text = r#"parser grammar P;
if_shutdown : SHUTDOWN NEWLINE ;
if_mode : MODE (ACCESS | TRUNK) NEWLINE ;
if_stanza : if_shutdown | if_mode ;
"#;
        let findings = check(text);
        assert!(findings.is_empty(), "Expected no findings, got: {:?}", findings);
    }

    #[test]
    fn test_labels_are_not_child_references() {
        let text = "parser grammar P;\nif_mode : (ACCESS # accessAlt | TRUNK # trunkAlt) NEWLINE ;\n";
        assert!(check(text).is_empty());
    }

    #[test]
    fn test_newline_not_directly_after_group() {
        let text = "parser grammar P;\nif_desc : (if_a | if_b) variable NEWLINE ;\n";
        assert!(check(text).is_empty());
    }
}
