//! Naming conventions and text heuristics shared by the rules.
//!
//! None of this understands grammar semantics. References are found by
//! scanning definition text for identifiers once comments, quoted literals,
//! actions and argument brackets have been blanked out.

use g4_lint_grammar::ParserRule;
use regex::Regex;
use std::sync::LazyLock;

/// Separator between a rule's prefix and the rest of its name
pub const SEPARATOR: char = '_';

/// Prefix of top-level statement rules
pub const TOP_LEVEL_PREFIX: &str = "s_";

/// Suffix of leaf rules whose matched text is discarded
pub const NULL_SUFFIX: &str = "_null";

/// Rules that swallow input and may be used from `_null` rules
pub const NULL_HELPERS: &[&str] = &["null_rest_of_line", "null_filler"];

/// Token that terminates a configuration line
pub const LINE_TERMINATOR: &str = "NEWLINE";

/// Prefix of lexer fragments
pub const FRAGMENT_PREFIX: &str = "F_";

/// Lowercase words that can appear in a rule body without being rule references
pub const FILLER_KEYWORDS: &[&str] = &[
    "catch", "channel", "finally", "fragment", "grammar", "import", "locals", "mode", "more",
    "options", "popMode", "pushMode", "returns", "skip", "throws", "type",
];

static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([a-z][A-Za-z0-9_]*)\b(\s*\+?=)?").unwrap());

/// Blank out comments, quoted literals, `# label`s, `{...}` actions and `[...]` arguments.
///
/// Line structure and byte positions of the remaining text are preserved.
pub fn strip_noise(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut brace_depth = 0usize;
    let mut bracket_depth = 0usize;

    while let Some(c) = chars.next() {
        if brace_depth > 0 || bracket_depth > 0 {
            match c {
                '{' => brace_depth += 1,
                '}' if brace_depth > 0 => brace_depth -= 1,
                '[' if brace_depth == 0 => bracket_depth += 1,
                ']' if brace_depth == 0 && bracket_depth > 0 => bracket_depth -= 1,
                _ => {}
            }
            out.push(if c == '\n' { '\n' } else { ' ' });
            continue;
        }

        match c {
            '/' if chars.peek() == Some(&'/') => {
                // Line comment: skip to end of line
                out.push(' ');
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                    out.push(' ');
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                out.push(' ');
                let mut prev = ' ';
                for next in chars.by_ref() {
                    out.push(if next == '\n' { '\n' } else { ' ' });
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            '\'' => {
                out.push(' ');
                while let Some(next) = chars.next() {
                    out.push(if next == '\n' { '\n' } else { ' ' });
                    if next == '\\' {
                        if let Some(escaped) = chars.next() {
                            out.push(if escaped == '\n' { '\n' } else { ' ' });
                        }
                    } else if next == '\'' {
                        break;
                    }
                }
            }
            '#' => {
                // Alternative label: `| X # fooAlt`
                out.push(' ');
                while let Some(&next) = chars.peek() {
                    if next == ' ' || next == '\t' || next.is_ascii_alphanumeric() || next == '_' {
                        out.push(' ');
                        chars.next();
                    } else {
                        break;
                    }
                }
            }
            '{' => {
                brace_depth = 1;
                out.push(' ');
            }
            '[' => {
                bracket_depth = 1;
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}

/// Lowercase identifiers referenced by a parser rule body, in order of first
/// appearance, excluding the rule itself, labels and filler keywords.
///
/// Null helpers are included; see [`real_references`].
pub fn rule_references(rule: &ParserRule) -> Vec<String> {
    let body = strip_noise(rule.body());
    let mut refs: Vec<String> = Vec::new();

    for caps in REFERENCE.captures_iter(&body) {
        if caps.get(2).is_some() {
            // `label = element` or `label += element`
            continue;
        }
        let name = &caps[1];
        if name == rule.name || FILLER_KEYWORDS.contains(&name) {
            continue;
        }
        if !refs.iter().any(|r| r == name) {
            refs.push(name.to_string());
        }
    }

    refs
}

/// References to rules other than the whitelisted null helpers.
pub fn real_references(rule: &ParserRule) -> Vec<String> {
    rule_references(rule)
        .into_iter()
        .filter(|name| !NULL_HELPERS.contains(&name.as_str()))
        .collect()
}

/// The first null helper a rule invokes, if any.
pub fn invoked_null_helper(rule: &ParserRule) -> Option<&'static str> {
    let refs = rule_references(rule);
    NULL_HELPERS
        .iter()
        .copied()
        .find(|helper| refs.iter().any(|r| r == helper))
}

/// The part of a name before its first internal separator, or the whole name.
pub fn prefix_of(name: &str) -> &str {
    match name.char_indices().find(|&(i, c)| i > 0 && c == SEPARATOR) {
        Some((i, _)) => &name[..i],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str, text: &str) -> ParserRule {
        ParserRule {
            name: name.to_string(),
            text: text.to_string(),
            line: 1,
        }
    }

    #[test]
    fn test_strip_noise() {
        let stripped = strip_noise("a 'b|c' { x(); } d[$e] // f g\nh /* i */ j");
        assert!(!stripped.contains('b'));
        assert!(!stripped.contains('|'));
        assert!(!stripped.contains('x'));
        assert!(!stripped.contains('$'));
        assert!(!stripped.contains('f'));
        assert!(!stripped.contains('i'));
        assert!(stripped.contains('a'));
        assert!(stripped.contains('d'));
        assert!(stripped.contains('h'));
        assert!(stripped.contains('j'));
        assert_eq!(stripped.lines().count(), 2);
    }

    #[test]
    fn test_strip_noise_escaped_quote() {
        let stripped = strip_noise(r"QUOTE : '\'' rest ;");
        assert!(stripped.contains("rest"));
    }

    #[test]
    fn test_rule_references() {
        let r = rule(
            "s_interface",
            "s_interface\n:\nINTERFACE name = variable NEWLINE\n(\nif_description\n| if_shutdown\n| s_interface\n)*\n;",
        );
        assert_eq!(
            rule_references(&r),
            vec!["variable", "if_description", "if_shutdown"]
        );
    }

    #[test]
    fn test_rule_references_skip_filler_and_literals() {
        let r = rule("foo", "foo returns [int x] : 'bar baz' qux options ;");
        assert_eq!(rule_references(&r), vec!["qux"]);
    }

    #[test]
    fn test_alternative_labels_are_not_references() {
        let r = rule(
            "if_mode",
            "if_mode\n:\nMODE access_mode # accessAlt\n| MODE trunk_mode #trunkAlt\n;",
        );
        assert_eq!(rule_references(&r), vec!["access_mode", "trunk_mode"]);
    }

    #[test]
    fn test_real_references_drop_helpers() {
        let r = rule("foo_null", "foo_null : FOO null_rest_of_line other ;");
        assert_eq!(real_references(&r), vec!["other"]);
        assert_eq!(invoked_null_helper(&r), Some("null_rest_of_line"));
    }

    #[test]
    fn test_prefix_of() {
        assert_eq!(prefix_of("ip_address"), "ip");
        assert_eq!(prefix_of("s_interface_name"), "s");
        assert_eq!(prefix_of("statement"), "statement");
        assert_eq!(prefix_of("_private"), "_private");
    }
}
