use crate::docs::RuleDoc;
use crate::linter::{Finding, LintRule, PARSER_ONLY, Severity};
use crate::rules::helpers::{
    NULL_HELPERS, NULL_SUFFIX, TOP_LEVEL_PREFIX, invoked_null_helper, real_references,
};
use g4_lint_grammar::{Grammar, GrammarKind};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "null-suffix",
    category: "structure",
    description: "`_null` rules must be leaves; leaves that discard input should end in `_null`",
    severity: "error",
    why: r#"The `_null` suffix tells the code walking the parse tree that the
matched text is intentionally ignored, so no listener exists for it.
If a `_null` rule invokes other parser rules, whatever those rules
match is silently dropped as well.

Conversely, a rule that only swallows input with a null helper such
as `null_rest_of_line` is a discard rule and should say so in its
name (warning)."#,
    bad_example: r#"parser grammar Foo_interface;

if_null : DESCRIPTION if_description ;

if_speed : SPEED null_rest_of_line ;"#,
    good_example: r#"parser grammar Foo_interface;

if_null : DESCRIPTION null_rest_of_line ;

if_speed_null : SPEED null_rest_of_line ;"#,
};

/// Check the leaf semantics of the `_null` suffix
pub struct NullSuffix;

impl LintRule for NullSuffix {
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
        let mut findings = Vec::new();

        for rule in &grammar.rules {
            let references = real_references(rule);

            if rule.name.ends_with(NULL_SUFFIX) {
                if !references.is_empty() {
                    findings.push(self.finding(
                        &format!(
                            "Rule '{}' ends with '{}' but references other parser rules: {}",
                            rule.name,
                            NULL_SUFFIX,
                            references.join(", ")
                        ),
                        Severity::Error,
                        rule.line,
                    ));
                }
                continue;
            }

            if !references.is_empty()
                || rule.name.starts_with(TOP_LEVEL_PREFIX)
                || NULL_HELPERS.contains(&rule.name.as_str())
            {
                continue;
            }

            if let Some(helper) = invoked_null_helper(rule) {
                findings.push(self.finding(
                    &format!(
                        "Rule '{}' only discards input via '{}'; consider renaming it to '{}{}'",
                        rule.name, helper, rule.name, NULL_SUFFIX
                    ),
                    Severity::Warning,
                    rule.line,
                ));
            }
        }

        findings
    }
}
