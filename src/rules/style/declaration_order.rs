use crate::docs::RuleDoc;
use crate::linter::{Finding, LintRule, PARSER_ONLY, Severity};
use crate::rules::helpers::prefix_of;
use g4_lint_grammar::{Grammar, GrammarKind, ParserRule};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "declaration-order",
    category: "style",
    description: "Rules sharing a prefix should be declared in alphabetical order",
    severity: "warning",
    why: r#"Vendor grammars grow to thousands of rules. Keeping each prefix group
(`if_*`, `ip_*`, `s_*`, ...) sorted makes a rule easy to find and keeps
merge conflicts local.

Only the first out-of-order rule of each group is reported, together
with the rule that belongs in its place."#,
    bad_example: r#"ip_address : ADDRESS IP_ADDRESS NEWLINE ;
ip_mtu : MTU dec NEWLINE ;
ip_access_group : ACCESS_GROUP variable NEWLINE ;"#,
    good_example: r#"ip_access_group : ACCESS_GROUP variable NEWLINE ;
ip_address : ADDRESS IP_ADDRESS NEWLINE ;
ip_mtu : MTU dec NEWLINE ;"#,
};

/// Check alphabetical order within each prefix group
pub struct DeclarationOrder;

impl LintRule for DeclarationOrder {
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
        // Groups keep the order in which their prefix first appears
        let mut groups: Vec<(&str, Vec<&ParserRule>)> = Vec::new();
        for rule in &grammar.rules {
            let prefix = prefix_of(&rule.name);
            match groups.iter_mut().find(|(p, _)| *p == prefix) {
                Some((_, members)) => members.push(rule),
                None => groups.push((prefix, vec![rule])),
            }
        }

        let mut findings = Vec::new();
        for (prefix, members) in &groups {
            let mut expected: Vec<&str> = members.iter().map(|r| r.name.as_str()).collect();
            expected.sort_unstable();

            let divergence = members
                .iter()
                .zip(&expected)
                .find(|(actual, expected)| actual.name != **expected);

            if let Some((actual, expected)) = divergence {
                findings.push(self.finding(
                    &format!(
                        "Rule '{}' is out of order in group '{}'; expected '{}' here",
                        actual.name, prefix, expected
                    ),
                    Severity::Warning,
                    actual.line,
                ));
            }
        }

        findings
    }
}
