//! Single-pass, line-oriented extraction of grammar facts.
//!
//! The extractor walks the file once, top to bottom, and never backtracks.
//! It recognizes just enough of the `.g4` surface syntax to find rule, token,
//! fragment, mode and import declarations:
//!
//! ```text
//! parser grammar CiscoParser;      // grammar kind marker
//! import Cisco_common, Cisco_bgp;  // imports
//!
//! s_hostname : HOSTNAME name = variable NEWLINE ;   // parser rule
//!
//! s_interface                       // split-colon layout
//! :
//!    INTERFACE if_inner*
//! ;
//! ```
//!
//! A definition runs from its declaring line to the first line whose trimmed
//! text ends with `;`. Text that never reaches a terminator is flushed at end
//! of input.

use crate::model::{
    Fragment, Grammar, GrammarFile, GrammarKind, Import, LexerToken, Mode, ParserRule,
};
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Marks the end of a rule definition.
pub const TERMINATOR: char = ';';

/// Bare keyword that classifies the next lexer rule as a fragment.
pub const FRAGMENT_KEYWORD: &str = "fragment";

/// Import name suffixes that mark the importing file as a main parser.
pub const MAIN_PARSER_IMPORT_SUFFIXES: &[&str] = &["parser", "_common"];

static GRAMMAR_KIND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(parser|lexer)\s+grammar\s+\w+").unwrap());
static IMPORT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^import\s+([^;]+);").unwrap());
static MODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^mode\s+([A-Za-z_]\w*)\s*;").unwrap());
static PARSER_RULE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]\w*)\s*:").unwrap());
static LEXER_RULE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(fragment\s+)?([A-Z]\w*)\s*:").unwrap());
static BARE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(fragment\s+)?([A-Za-z]\w*)$").unwrap());

/// Build a [`Grammar`] from a loaded file.
pub fn extract(file: &GrammarFile) -> Grammar {
    let mut extractor = Extractor::new(file.path.clone());
    for (idx, line) in file.lines().enumerate() {
        extractor.feed(idx + 1, line);
    }
    extractor.finish()
}

/// Build a [`Grammar`] from raw text, attributing it to `path`.
pub fn parse_string(path: impl Into<PathBuf>, text: &str) -> Grammar {
    extract(&GrammarFile::new(path, text))
}

/// Whether a trimmed line is a full-line comment.
pub fn is_comment_line(trimmed: &str) -> bool {
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}

/// The line up to a `//` comment that is not inside a quoted literal.
fn strip_line_comment(line: &str) -> &str {
    match scan_code(line, |_, _| {}) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Net change in `{`/`}` nesting over a line, ignoring quotes and comments.
fn brace_delta(line: &str) -> isize {
    let mut delta = 0;
    scan_code(line, |_, c| match c {
        '{' => delta += 1,
        '}' => delta -= 1,
        _ => {}
    });
    delta
}

/// Visit the characters of `line` outside quoted literals, stopping at a
/// `//` comment. Returns the comment's byte offset, if any.
fn scan_code(line: &str, mut visit: impl FnMut(usize, char)) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut chars = line.char_indices().peekable();
    while let Some((pos, c)) = chars.next() {
        match quote {
            Some(_) if c == '\\' => {
                chars.next();
            }
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' => quote = Some(c),
                '/' if matches!(chars.peek(), Some((_, '/'))) => return Some(pos),
                _ => visit(pos, c),
            },
        }
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DefinitionKind {
    Parser,
    Token { mode: Option<usize> },
    Fragment,
}

#[derive(Debug)]
struct OpenDefinition {
    kind: DefinitionKind,
    name: String,
    line: usize,
    lines: Vec<String>,
}

/// A bare identifier waiting for a `:` on the next significant line.
#[derive(Debug)]
struct PendingName {
    name: String,
    line: usize,
    text: String,
    fragment: bool,
}

struct Extractor {
    grammar: Grammar,
    open: Option<OpenDefinition>,
    pending: Option<PendingName>,
    current_mode: Option<usize>,
    fragment_marker: bool,
    /// Brace depth inside a top-level `@name { ... }` action block.
    action_depth: usize,
}

impl Extractor {
    fn new(path: PathBuf) -> Self {
        Self {
            grammar: Grammar::new(path),
            open: None,
            pending: None,
            current_mode: None,
            fragment_marker: false,
            action_depth: 0,
        }
    }

    fn feed(&mut self, line_number: usize, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() || is_comment_line(trimmed) {
            return;
        }

        if self.action_depth > 0 {
            self.action_depth = self.action_depth.saturating_add_signed(brace_delta(trimmed));
            return;
        }

        if let Some(pending) = self.pending.take() {
            if trimmed.starts_with(':') {
                let kind = self.kind_for(&pending.name, pending.fragment);
                self.open_definition(kind, pending.name, pending.line, pending.text);
                self.append(trimmed);
                return;
            }
        }

        if let Some(caps) = PARSER_RULE_START.captures(trimmed) {
            self.flush();
            self.fragment_marker = false;
            self.open_definition(
                DefinitionKind::Parser,
                caps[1].to_string(),
                line_number,
                String::new(),
            );
            self.append(trimmed);
            return;
        }

        if matches!(&self.open, Some(def) if def.kind == DefinitionKind::Parser) {
            self.append(trimmed);
            return;
        }

        if let Some(caps) = LEXER_RULE_START.captures(trimmed) {
            self.flush();
            let fragment = caps.get(1).is_some() || self.fragment_marker;
            self.fragment_marker = false;
            let name = caps[2].to_string();
            let kind = self.kind_for(&name, fragment);
            self.open_definition(kind, name, line_number, String::new());
            self.append(trimmed);
            return;
        }

        if self.open.is_some() {
            self.append(trimmed);
            return;
        }

        self.top_level(line_number, trimmed);
    }

    /// Handle a line outside of any definition.
    fn top_level(&mut self, line_number: usize, trimmed: &str) {
        // Embedded target-language code: `@members { ... }` or a `{` on its own line
        if trimmed.starts_with(['@', '{']) {
            self.pending = None;
            self.fragment_marker = false;
            self.action_depth = brace_delta(trimmed).max(0).unsigned_abs();
            return;
        }

        if let Some(caps) = GRAMMAR_KIND.captures(trimmed) {
            let kind = if &caps[1] == "parser" {
                GrammarKind::Parser
            } else {
                GrammarKind::Lexer
            };
            // The parser marker wins if a file somehow carries both.
            if self.grammar.kind != Some(GrammarKind::Parser) {
                self.grammar.kind = Some(kind);
            }
            return;
        }

        if let Some(caps) = IMPORT.captures(trimmed) {
            self.grammar.imports.extend(
                caps[1]
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(|name| Import {
                        name: name.to_string(),
                        line: line_number,
                    }),
            );
            return;
        }

        if let Some(caps) = MODE.captures(trimmed) {
            self.grammar.modes.push(Mode {
                name: caps[1].to_string(),
                line: line_number,
                tokens: Vec::new(),
            });
            self.current_mode = Some(self.grammar.modes.len() - 1);
            return;
        }

        if trimmed == FRAGMENT_KEYWORD {
            self.fragment_marker = true;
            return;
        }

        if let Some(caps) = BARE_IDENTIFIER.captures(trimmed) {
            self.pending = Some(PendingName {
                name: caps[2].to_string(),
                line: line_number,
                text: trimmed.to_string(),
                fragment: caps.get(1).is_some() || self.fragment_marker,
            });
        }
        self.fragment_marker = false;
    }

    fn kind_for(&self, name: &str, fragment: bool) -> DefinitionKind {
        if name.starts_with(|c: char| c.is_ascii_lowercase()) {
            DefinitionKind::Parser
        } else if fragment {
            DefinitionKind::Fragment
        } else {
            DefinitionKind::Token {
                mode: self.current_mode,
            }
        }
    }

    fn open_definition(&mut self, kind: DefinitionKind, name: String, line: usize, first: String) {
        let lines = if first.is_empty() { Vec::new() } else { vec![first] };
        self.open = Some(OpenDefinition {
            kind,
            name,
            line,
            lines,
        });
    }

    /// Append a trimmed line to the open definition, closing it at the terminator.
    fn append(&mut self, trimmed: &str) {
        let code = strip_line_comment(trimmed).trim_end();
        if let Some(def) = self.open.as_mut() {
            def.lines.push(code.to_string());
        }
        if code.ends_with(TERMINATOR) {
            self.flush();
        }
    }

    fn flush(&mut self) {
        let Some(def) = self.open.take() else {
            return;
        };
        let text = def.lines.join("\n");
        match def.kind {
            DefinitionKind::Parser => self.grammar.rules.insert(ParserRule {
                name: def.name,
                text,
                line: def.line,
            }),
            DefinitionKind::Token { mode } => {
                let token = LexerToken {
                    name: def.name,
                    line: def.line,
                    text,
                };
                match mode.and_then(|idx| self.grammar.modes.get_mut(idx)) {
                    Some(mode) => mode.tokens.push(token),
                    None => self.grammar.tokens.push(token),
                }
            }
            DefinitionKind::Fragment => self.grammar.fragments.push(Fragment {
                name: def.name,
                line: def.line,
                text,
            }),
        }
    }

    fn finish(mut self) -> Grammar {
        self.flush();
        let is_main_parser = self.grammar.import_names().any(|name| {
            let lower = name.to_lowercase();
            MAIN_PARSER_IMPORT_SUFFIXES
                .iter()
                .any(|suffix| lower.ends_with(suffix))
        });
        self.grammar.is_main_parser = is_main_parser;

        tracing::debug!(
            path = %self.grammar.path.display(),
            kind = ?self.grammar.kind,
            rules = self.grammar.rules.len(),
            tokens = self.grammar.all_tokens().len(),
            fragments = self.grammar.fragments.len(),
            modes = self.grammar.modes.len(),
            "extracted grammar"
        );

        self.grammar
    }
}
