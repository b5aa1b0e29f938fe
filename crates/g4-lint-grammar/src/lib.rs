//! Extraction of rule, token, fragment, mode and import facts from ANTLR
//! `.g4` grammar files.
//!
//! This crate does not parse grammars. It runs a single line-oriented pass
//! over the text and records where things are declared, which is all the
//! convention checks in `g4-lint` need.
//!
//! # Quick Start
//!
//! ```
//! use g4_lint_grammar::{parse_string, GrammarKind};
//!
//! let grammar = parse_string(
//!     "CiscoParser.g4",
//!     "parser grammar CiscoParser;\ns_hostname : HOSTNAME variable NEWLINE ;\n",
//! );
//!
//! assert_eq!(grammar.kind, Some(GrammarKind::Parser));
//! assert_eq!(grammar.rules.get("s_hostname").unwrap().line, 2);
//! ```
//!
//! To extract from a file on disk:
//!
//! ```no_run
//! use std::path::Path;
//! use g4_lint_grammar::parse_file;
//!
//! let grammar = parse_file(Path::new("grammar/CiscoLexer.g4")).unwrap();
//! ```
//!
//! # Modules
//!
//! - [`model`]: [`Grammar`], [`ParserRule`], [`RuleSet`], [`LexerToken`],
//!   [`Fragment`], [`Mode`], [`Import`]
//! - [`extract`]: the line scanner
//! - [`error`]: [`GrammarError`]

pub mod error;
pub mod extract;
pub mod model;

pub use error::GrammarError;
pub use extract::{extract, is_comment_line, parse_string};
pub use model::{
    Fragment, Grammar, GrammarFile, GrammarKind, Import, LexerToken, Mode, ParserRule, RuleSet,
};

use std::fs;
use std::path::Path;

/// Read a grammar file from disk.
pub fn load(path: &Path) -> Result<GrammarFile, GrammarError> {
    let text = fs::read_to_string(path).map_err(|e| GrammarError::io(path, e))?;
    Ok(GrammarFile::new(path, text))
}

/// Read and extract a grammar file.
pub fn parse_file(path: &Path) -> Result<Grammar, GrammarError> {
    let file = load(path)?;
    Ok(extract(&file))
}
