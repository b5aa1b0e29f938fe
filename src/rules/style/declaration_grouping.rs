use crate::docs::RuleDoc;
use crate::linter::{Finding, LintRule, PARSER_ONLY, Severity};
use crate::rules::helpers::prefix_of;
use g4_lint_grammar::{Grammar, GrammarKind};
use std::collections::HashSet;

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "declaration-grouping",
    category: "style",
    description: "Rules sharing a prefix should be declared together",
    severity: "warning",
    why: r#"Rules with the same prefix describe one area of the configuration
language. When a prefix group is split by another group, readers miss
half of it and new rules end up in the wrong place."#,
    bad_example: r#"if_description : DESCRIPTION NEWLINE ;
ip_address : ADDRESS NEWLINE ;
if_shutdown : SHUTDOWN NEWLINE ;"#,
    good_example: r#"if_description : DESCRIPTION NEWLINE ;
if_shutdown : SHUTDOWN NEWLINE ;
ip_address : ADDRESS NEWLINE ;"#,
};

/// Check that prefix groups are contiguous
pub struct DeclarationGrouping;

impl LintRule for DeclarationGrouping {
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
        let mut seen: HashSet<&str> = HashSet::new();
        let mut previous: Option<&str> = None;

        for rule in &grammar.rules {
            let prefix = prefix_of(&rule.name);
            if let Some(prev) = previous
                && prev != prefix
                && seen.contains(prefix)
            {
                findings.push(self.finding(
                    &format!(
                        "Rule '{}' reopens group '{}' after group '{}'",
                        rule.name, prefix, prev
                    ),
                    Severity::Warning,
                    rule.line,
                ));
            }
            seen.insert(prefix);
            previous = Some(prefix);
        }

        findings
    }
}
