use crate::docs::RuleDoc;
use crate::linter::{Finding, LintRule, PARSER_ONLY, Severity};
use crate::rules::helpers::strip_noise;
use g4_lint_grammar::{Grammar, GrammarKind, ParserRule};
use regex::Regex;
use std::sync::LazyLock;

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "first-token-ambiguity",
    category: "style",
    description: "Alternatives that start with the same token",
    severity: "warning",
    why: r#"When several alternatives of a rule begin with the same token, the
parser has to look further ahead to pick one, and the grammar reads
as if the shared prefix was copied around. Factoring the common token
out keeps the decision local and the rule shorter.

The check is textual: it compares the first uppercase identifier of
each `|`-separated alternative."#,
    bad_example: r#"s_interface
:
   INTERFACE NAME NEWLINE
   | INTERFACE VLAN NEWLINE
;"#,
    good_example: r#"s_interface
:
   INTERFACE
   (
      NAME
      | VLAN
   ) NEWLINE
;"#,
};

static FIRST_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b([A-Z]\w*)\b").unwrap());

/// Check for alternatives sharing their first token
pub struct FirstTokenAmbiguity;

impl FirstTokenAmbiguity {
    /// Tokens that open more than one alternative, in order of first appearance
    fn shared_first_tokens(rule: &ParserRule) -> Vec<String> {
        let body = strip_noise(rule.body());
        if !body.contains('|') {
            return Vec::new();
        }

        let mut counts: Vec<(String, usize)> = Vec::new();
        for alternative in body.split('|') {
            let Some(caps) = FIRST_TOKEN.captures(alternative) else {
                continue;
            };
            let token = &caps[1];
            match counts.iter_mut().find(|(name, _)| name == token) {
                Some((_, count)) => *count += 1,
                None => counts.push((token.to_string(), 1)),
            }
        }

        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(token, _)| token)
            .collect()
    }
}

impl LintRule for FirstTokenAmbiguity {
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
            for token in Self::shared_first_tokens(rule) {
                findings.push(self.finding(
                    &format!(
                        "Several alternatives of '{}' start with '{}'; consider factoring it out",
                        rule.name, token
                    ),
                    Severity::Warning,
                    rule.line,
                ));
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use g4_lint_grammar::parse_string;

    fn check(text: &str) -> Vec<Finding> {
        FirstTokenAmbiguity.check(&parse_string("FooParser.g4", text))
    }

    #[test]
    fn test_shared_first_token() {
        let text = r#"parser grammar FooParser;

s_interface
:
   INTERFACE NAME NEWLINE
   | INTERFACE VLAN NEWLINE
   | NO INTERFACE NEWLINE
;
"#;
        let findings = check(text);
        assert_eq!(findings.len(), 1, "Expected 1 finding, got: {:?}", findings);
        assert_eq!(findings[0].line, Some(3));
        assert!(findings[0].message.contains("'INTERFACE'"));
    }

    #[test]
    fn test_one_warning_per_token() {
        let text = "parser grammar P;\na : X b | X c | Y d | Y e | X f ;\n";
        let findings = check(text);
        assert_eq!(findings.len(), 2);
        assert!(findings[0].message.contains("'X'"));
        assert!(findings[1].message.contains("'Y'"));
    }

    #[test]
    fn test_distinct_first_tokens() {
        let text = "parser grammar P;\na : X b | Y c ;\nd : X X ;\n";
        assert!(check(text).is_empty());
    }

    #[test]
    fn test_alternation_inside_literal_ignored() {
        let text = "parser grammar P;\na : X '|' X ;\n";
        assert!(check(text).is_empty());
    }
}
