use crate::docs::RuleDoc;
use crate::linter::{Finding, LintRule, PARSER_ONLY, Severity};
use g4_lint_grammar::{Grammar, GrammarKind};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "circular-import",
    category: "structure",
    description: "Imports whose name contains the importing grammar's own name",
    severity: "warning",
    why: r#"Feature grammars are imported by the main parser, not the other way
around. An import that contains the importing file's own name (for
example `Cisco_bgp` importing `Cisco_bgp_common`) usually points at
a cycle or at a helper that should be merged into the file itself.

This is a naming heuristic, not a cycle analysis."#,
    bad_example: r#"// Cisco_bgp.g4
parser grammar Cisco_bgp;

import Cisco_bgp_common;"#,
    good_example: r#"// Cisco_bgp.g4
parser grammar Cisco_bgp;

import Cisco_common;"#,
};

/// Flag imports that look like they point back at the importing grammar
pub struct CircularImport;

impl LintRule for CircularImport {
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
        let own_name = grammar.base_name().to_lowercase();
        if own_name.is_empty() {
            return Vec::new();
        }

        grammar
            .imports
            .iter()
            .filter(|import| import.name.to_lowercase().contains(&own_name))
            .map(|import| {
                self.finding(
                    &format!(
                        "Import '{}' contains this grammar's own name '{}'; possible circular import",
                        import.name,
                        grammar.base_name()
                    ),
                    Severity::Warning,
                    import.line,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use g4_lint_grammar::parse_string;

    #[test]
    fn test_self_named_import() {
        let grammar = parse_string(
            "grammars/Cisco_bgp.g4",
            "parser grammar Cisco_bgp;\nimport Cisco_common, CISCO_BGP_extra;\n",
        );
        let findings = CircularImport.check(&grammar);
        assert_eq!(findings.len(), 1, "Expected 1 finding, got: {:?}", findings);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].line, Some(2));
        assert!(findings[0].message.contains("'CISCO_BGP_extra'"));
    }

    #[test]
    fn test_unrelated_imports() {
        let grammar = parse_string(
            "CiscoParser.g4",
            "parser grammar CiscoParser;\nimport Cisco_common, Cisco_bgp;\n",
        );
        assert!(CircularImport.check(&grammar).is_empty());
    }
}
