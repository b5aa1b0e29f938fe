//! The structured facts extracted from a grammar file.
//!
//! A [`Grammar`] is built once per file by [`extract`](crate::extract) and is
//! read-only afterwards, except for [`Grammar::retain_rules`] which narrows the
//! parser rule set before validation.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Which validator battery a grammar file is subject to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarKind {
    /// `parser grammar Name;`
    Parser,
    /// `lexer grammar Name;`
    Lexer,
}

impl std::fmt::Display for GrammarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarKind::Parser => write!(f, "parser"),
            GrammarKind::Lexer => write!(f, "lexer"),
        }
    }
}

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Raw contents of a grammar file on disk.
#[derive(Debug, Clone)]
pub struct GrammarFile {
    pub path: PathBuf,
    pub text: String,
}

impl GrammarFile {
    /// A leading byte order mark is dropped.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let mut text = text.into();
        if text.starts_with(BYTE_ORDER_MARK) {
            text.drain(..BYTE_ORDER_MARK.len_utf8());
        }
        Self {
            path: path.into(),
            text,
        }
    }

    /// The file's lines, without line terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// A lowercase-named production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserRule {
    pub name: String,
    /// Trimmed source lines of the definition, joined with `\n`.
    /// Includes the declaring line (and therefore the rule name and colon).
    pub text: String,
    /// 1-based line of the declaration.
    pub line: usize,
}

impl ParserRule {
    /// The definition with the leading `name :` removed.
    pub fn body(&self) -> &str {
        let text = self.text.trim_start();
        let rest = text.strip_prefix(self.name.as_str()).unwrap_or(text);
        let rest = rest.trim_start();
        rest.strip_prefix(':').unwrap_or(rest)
    }
}

/// Parser rules keyed by name, iterated in order of first appearance.
///
/// Re-declaring a name replaces the earlier definition but keeps its slot.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<ParserRule>,
    index: HashMap<String, usize>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, rule: ParserRule) {
        match self.index.get(&rule.name) {
            Some(&slot) => self.rules[slot] = rule,
            None => {
                self.index.insert(rule.name.clone(), self.rules.len());
                self.rules.push(rule);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParserRule> {
        self.index.get(name).map(|&slot| &self.rules[slot])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParserRule> {
        self.rules.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn retain(&mut self, keep: impl Fn(&ParserRule) -> bool) {
        self.rules.retain(keep);
        self.index = self
            .rules
            .iter()
            .enumerate()
            .map(|(slot, rule)| (rule.name.clone(), slot))
            .collect();
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a ParserRule;
    type IntoIter = std::slice::Iter<'a, ParserRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An uppercase-named lexer rule that is emitted as a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerToken {
    pub name: String,
    pub line: usize,
    /// Trimmed definition lines joined with `\n`, including `NAME :`.
    pub text: String,
}

impl LexerToken {
    /// The pattern part of the definition: after the colon, without the
    /// terminating `;` and any `-> command` suffix.
    pub fn pattern(&self) -> &str {
        lexer_pattern(&self.name, &self.text)
    }
}

/// A lexer helper rule that is not emitted as a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub name: String,
    pub line: usize,
    pub text: String,
}

impl Fragment {
    pub fn pattern(&self) -> &str {
        lexer_pattern(&self.name, &self.text)
    }
}

fn lexer_pattern<'a>(name: &str, text: &'a str) -> &'a str {
    let text = text.trim_start();
    let text = text.strip_prefix("fragment").unwrap_or(text).trim_start();
    let text = text.strip_prefix(name).unwrap_or(text).trim_start();
    let text = text.strip_prefix(':').unwrap_or(text);
    let text = text.trim_end();
    let text = text.strip_suffix(';').unwrap_or(text);
    let text = match find_command_arrow(text) {
        Some(pos) => &text[..pos],
        None => text,
    };
    text.trim()
}

/// Position of a lexer command arrow `->` that is not inside a quoted literal.
fn find_command_arrow(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut in_quote = false;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if in_quote => i += 1,
            b'\'' => in_quote = !in_quote,
            b'-' if !in_quote && bytes.get(i + 1) == Some(&b'>') => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}

/// A named lexer sub-context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    pub name: String,
    pub line: usize,
    pub tokens: Vec<LexerToken>,
}

/// A grammar named in an `import` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub name: String,
    pub line: usize,
}

/// Everything extracted from one grammar file.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub path: PathBuf,
    pub kind: Option<GrammarKind>,
    pub rules: RuleSet,
    /// Tokens declared before any `mode` declaration.
    pub tokens: Vec<LexerToken>,
    pub modes: Vec<Mode>,
    pub fragments: Vec<Fragment>,
    pub imports: Vec<Import>,
    /// Set when an import names a parser or common grammar.
    pub is_main_parser: bool,
}

impl Grammar {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: None,
            rules: RuleSet::new(),
            tokens: Vec::new(),
            modes: Vec::new(),
            fragments: Vec::new(),
            imports: Vec::new(),
            is_main_parser: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file stem, used as the grammar's own name.
    pub fn base_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn import_names(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(|i| i.name.as_str())
    }

    /// All tokens (root and mode-scoped) in declaration order.
    pub fn all_tokens(&self) -> Vec<&LexerToken> {
        let mut tokens: Vec<&LexerToken> = self
            .tokens
            .iter()
            .chain(self.modes.iter().flat_map(|m| m.tokens.iter()))
            .collect();
        tokens.sort_by_key(|t| t.line);
        tokens
    }

    /// Keep only the parser rules whose names are in `names`.
    ///
    /// Tokens, fragments, modes and imports are left untouched.
    pub fn retain_rules(&mut self, names: &HashSet<String>) {
        self.rules.retain(|rule| names.contains(&rule.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str, text: &str, line: usize) -> ParserRule {
        ParserRule {
            name: name.to_string(),
            text: text.to_string(),
            line,
        }
    }

    #[test]
    fn test_grammar_kind_display() {
        assert_eq!(GrammarKind::Parser.to_string(), "parser");
        assert_eq!(GrammarKind::Lexer.to_string(), "lexer");
    }

    #[test]
    fn test_byte_order_mark_dropped() {
        let file = GrammarFile::new("L.g4", "\u{feff}lexer grammar L;\n");
        assert_eq!(file.lines().next(), Some("lexer grammar L;"));
    }

    #[test]
    fn test_rule_set_replaces_in_place() {
        let mut rules = RuleSet::new();
        rules.insert(rule("a", "a : X ;", 1));
        rules.insert(rule("b", "b : Y ;", 2));
        rules.insert(rule("a", "a : Z ;", 3));

        let names: Vec<_> = rules.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(rules.get("a").unwrap().line, 3);
        assert_eq!(rules.get("a").unwrap().text, "a : Z ;");
    }

    #[test]
    fn test_body_strips_name_and_colon() {
        let r = rule("s_foo", "s_foo\n:\nFOO NEWLINE\n;", 1);
        assert_eq!(r.body().trim(), "FOO NEWLINE\n;");
    }

    #[test]
    fn test_lexer_pattern() {
        let token = LexerToken {
            name: "WS".to_string(),
            line: 1,
            text: "WS : [ \\t]+ -> channel(HIDDEN) ;".to_string(),
        };
        assert_eq!(token.pattern(), "[ \\t]+");

        let fragment = Fragment {
            name: "F_Digit".to_string(),
            line: 2,
            text: "fragment F_Digit : [0-9] ;".to_string(),
        };
        assert_eq!(fragment.pattern(), "[0-9]");

        let arrow = LexerToken {
            name: "ARROW".to_string(),
            line: 3,
            text: "ARROW : '->' ;".to_string(),
        };
        assert_eq!(arrow.pattern(), "'->'");
    }

    #[test]
    fn test_retain_rules() {
        let mut grammar = Grammar::new("Foo.g4");
        grammar.rules.insert(rule("a", "a : X ;", 1));
        grammar.rules.insert(rule("b", "b : X ;", 2));
        grammar.rules.insert(rule("c", "c : X ;", 3));

        let keep: HashSet<String> = ["a".to_string(), "c".to_string()].into_iter().collect();
        grammar.retain_rules(&keep);

        let names: Vec<_> = grammar.rules.names().collect();
        assert_eq!(names, vec!["a", "c"]);
        assert!(grammar.rules.get("b").is_none());
        assert_eq!(grammar.rules.get("c").unwrap().line, 3);
    }

    #[test]
    fn test_base_name() {
        let grammar = Grammar::new("/tmp/grammars/Cisco_bgp.g4");
        assert_eq!(grammar.base_name(), "Cisco_bgp");
    }
}
