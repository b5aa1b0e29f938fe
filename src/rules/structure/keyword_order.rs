use crate::docs::RuleDoc;
use crate::linter::{ALL_GRAMMARS, Finding, LintRule, Severity};
use crate::rules::helpers::FRAGMENT_PREFIX;
use g4_lint_grammar::{Grammar, GrammarKind, LexerToken};
use regex::Regex;
use std::sync::LazyLock;

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "keyword-order",
    category: "structure",
    description: "Keyword tokens must be declared before catch-all patterns",
    severity: "warning",
    why: r#"When two lexer rules match input of the same length, the one
declared first wins. A keyword such as 'shutdown' declared after a
general pattern such as [a-z]+ can never be produced, because the
general pattern matches the same text and comes first.

Only the first such keyword is reported per file."#,
    bad_example: r#"lexer grammar FooLexer;

WORD : [a-z]+ ;
SHUTDOWN : 'shutdown' ;"#,
    good_example: r#"lexer grammar FooLexer;

SHUTDOWN : 'shutdown' ;
WORD : [a-z]+ ;"#,
};

static KEYWORD_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^'[A-Za-z]+'$").unwrap());

/// Check that keywords precede general lexer patterns
pub struct KeywordOrder;

impl KeywordOrder {
    fn is_general(pattern: &str, grammar: &Grammar) -> bool {
        if pattern.starts_with(['[', '~', '.']) {
            return true;
        }
        let first_word: String = pattern
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        !first_word.is_empty()
            && (first_word.starts_with(FRAGMENT_PREFIX)
                || grammar.fragments.iter().any(|f| f.name == first_word))
    }

    fn is_keyword(token: &LexerToken) -> bool {
        KEYWORD_LITERAL.is_match(token.pattern())
    }
}

impl LintRule for KeywordOrder {
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
        let tokens = grammar.all_tokens();

        let Some(general_idx) = tokens
            .iter()
            .position(|token| Self::is_general(token.pattern(), grammar))
        else {
            return Vec::new();
        };
        let general = tokens[general_idx];

        tokens[general_idx + 1..]
            .iter()
            .find(|token| Self::is_keyword(token))
            .map(|keyword| {
                vec![self.finding(
                    &format!(
                        "Keyword token '{}' is declared after general pattern '{}' (line {}) and may never match",
                        keyword.name, general.name, general.line
                    ),
                    Severity::Warning,
                    keyword.line,
                )]
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use g4_lint_grammar::parse_string;

    fn check(text: &str) -> Vec<Finding> {
        KeywordOrder.check(&parse_string("FooLexer.g4", text))
    }

    #[test]
    fn test_keywords_first() {
        let text = r#"lexer grammar FooLexer;
HOSTNAME : 'hostname' ;
SHUTDOWN : 'shutdown' ;
WORD : [a-z]+ ;
"#;
        let findings = check(text);
        assert!(findings.is_empty(), "Expected no findings, got: {:?}", findings);
    }

    #[test]
    fn test_keyword_after_general_pattern_reported_once() {
        let text = r#"lexer grammar FooLexer;
HOSTNAME : 'hostname' ;
WORD : [a-z]+ ;
SHUTDOWN : 'shutdown' ;
DESCRIPTION : 'description' ;
"#;
        let findings = check(text);
        assert_eq!(findings.len(), 1, "Expected 1 finding, got: {:?}", findings);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].line, Some(4));
        assert!(findings[0].message.contains("'SHUTDOWN'"));
        assert!(findings[0].message.contains("'WORD' (line 3)"));
    }

    #[test]
    fn test_negation_and_fragment_reference_are_general() {
        let text = "lexer grammar L;\nLINE : ~[\\r\\n]+ ;\nNO : 'no' ;\n";
        assert_eq!(check(text).len(), 1);

        let text = "lexer grammar L;\nfragment F_Word : [a-z]+ ;\nVARIABLE : F_Word ;\nNO : 'no' ;\n";
        assert_eq!(check(text).len(), 1);
    }

    #[test]
    fn test_fragments_do_not_establish_position() {
        let text = "lexer grammar L;\nfragment F_Word : [a-z]+ ;\nNO : 'no' ;\n";
        assert!(check(text).is_empty());
    }

    #[test]
    fn test_non_alphabetic_literals_are_not_keywords() {
        let text = "lexer grammar L;\nWORD : [a-z]+ ;\nDASH : '-' ;\nIP_ADDR : 'ip-addr' ;\nTHEN : 'then' -> pushMode(M_Then) ;\n";
        let findings = check(text);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("'THEN'"));
    }
}
