//! Integration tests for extracting the sample grammars under `tests/fixtures`.

use g4_lint_grammar::{GrammarKind, parse_file};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_extract_all_fixtures() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");

    let grammar_files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .expect("Failed to read fixtures directory")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "g4"))
        .collect();

    assert!(!grammar_files.is_empty(), "No .g4 files found in fixtures");

    for path in &grammar_files {
        let grammar = parse_file(path).expect("Failed to read fixture");
        assert!(grammar.kind.is_some(), "{} has no grammar kind", path.display());
    }
}

#[test]
fn test_sample_lexer() {
    let grammar = parse_file(&fixture("SampleLexer.g4")).unwrap();

    assert_eq!(grammar.kind, Some(GrammarKind::Lexer));

    let tokens: Vec<_> = grammar.tokens.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        tokens,
        vec!["DESCRIPTION", "HOSTNAME", "INTERFACE", "SHUTDOWN", "NEWLINE", "VARIABLE", "WS"]
    );

    let fragments: Vec<_> = grammar.fragments.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fragments, vec!["F_Digit", "F_Letter", "F_Newline", "F_Whitespace"]);

    assert_eq!(grammar.modes.len(), 1);
    let mode_tokens: Vec<_> = grammar.modes[0]
        .tokens
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(mode_tokens, vec!["M_Description_NEWLINE", "M_Description_LINE"]);

    let hostname = &grammar.tokens[1];
    assert_eq!(hostname.line, 14);
    assert_eq!(hostname.pattern(), "'hostname'");
    assert_eq!(grammar.tokens[6].pattern(), "F_Whitespace+");
}

#[test]
fn test_sample_parser() {
    let grammar = parse_file(&fixture("SampleParser.g4")).unwrap();

    assert_eq!(grammar.kind, Some(GrammarKind::Parser));
    let imports: Vec<_> = grammar.import_names().collect();
    assert_eq!(imports, vec!["Sample_common", "Sample_interface"]);
    assert!(grammar.is_main_parser);

    let names: Vec<_> = grammar.rules.names().collect();
    assert_eq!(names, vec!["sample_configuration", "statement", "s_hostname", "s_null"]);
    assert_eq!(grammar.rules.get("s_null").unwrap().line, 26);
    assert!(grammar.tokens.is_empty());
}
