use crate::docs::RuleDoc;
use crate::linter::{Finding, LintRule, PARSER_ONLY, Severity};
use g4_lint_grammar::{Grammar, GrammarKind};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "parser-rule-case",
    category: "naming",
    description: "Parser rule names must be entirely lowercase",
    severity: "error",
    why: r#"Parser rules are named in snake_case so that the prefix and suffix
conventions (`s_`, `_null`, shared prefixes) can be read off the name.
A camelCase rule name breaks grouping and ordering checks and is
inconsistent with the rest of the grammar."#,
    bad_example: r#"parser grammar FooParser;

ipAddress : IP_ADDRESS ;"#,
    good_example: r#"parser grammar FooParser;

ip_address : IP_ADDRESS ;"#,
};

/// Check that parser rule names contain no uppercase characters
pub struct ParserRuleCase;

impl LintRule for ParserRuleCase {
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
            .filter(|rule| rule.name != rule.name.to_lowercase())
            .map(|rule| {
                self.finding(
                    &format!(
                        "Parser rule '{}' must be entirely lowercase (expected '{}')",
                        rule.name,
                        rule.name.to_lowercase()
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
        ParserRuleCase.check(&parse_string("FooParser.g4", text))
    }

    #[test]
    fn test_lowercase_names() {
        let findings = check("parser grammar FooParser;\nip_address : IP ;\ns_foo2 : FOO ;\n");
        assert!(findings.is_empty(), "Expected no findings, got: {:?}", findings);
    }

    #[test]
    fn test_uppercase_character_reported_once() {
        let findings = check("parser grammar FooParser;\nipAddress\n:\n  IP\n  | IPV6\n;\n");
        assert_eq!(findings.len(), 1, "Expected 1 finding, got: {:?}", findings);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].line, Some(2));
        assert!(findings[0].message.contains("'ipAddress'"));
        assert!(findings[0].message.contains("'ipaddress'"));
    }

    #[test]
    fn test_one_finding_per_offending_rule() {
        let findings = check("parser grammar FooParser;\naB : X ;\ncD : Y ;\nef : Z ;\n");
        assert_eq!(findings.len(), 2);
    }
}
