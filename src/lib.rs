//! Convention checks for ANTLR `.g4` grammars of network-device
//! configuration languages.
//!
//! Each file is reduced to the facts in [`g4_lint_grammar::Grammar`] and run
//! through the battery matching its `parser grammar` / `lexer grammar`
//! marker. Checks are textual heuristics over declaration names and rule
//! bodies; nothing here parses a grammar.
//!
//! ```
//! use g4_lint::{Linter, parse_string};
//!
//! let grammar = parse_string("FooParser.g4", "parser grammar FooParser;\nfooBar : X ;\n");
//! let findings = Linter::with_default_rules().lint(&grammar);
//! assert_eq!(findings[0].rule, "parser-rule-case");
//! ```

pub mod config;
pub mod diff;
#[cfg(feature = "cli")]
pub mod discover;
pub mod docs;
pub mod linter;
#[cfg(feature = "cli")]
pub mod logging;
pub mod reporter;
pub mod rules;

pub use config::{ColorMode, ConfigError, LintConfig};
pub use diff::{ChangedRules, GitDiff, NoDiff, narrow_to_changed};
pub use g4_lint_grammar::{Grammar, GrammarError, GrammarKind, parse_file, parse_string};
pub use linter::{Finding, LintRule, Linter, RULE_CATEGORIES, Severity};
pub use reporter::{OutputFormat, Reporter};

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Findings for one grammar file, sorted by line
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub findings: Vec<Finding>,
}

impl FileReport {
    pub fn new(path: impl Into<PathBuf>, mut findings: Vec<Finding>) -> Self {
        // Stable: findings on one line keep battery order
        findings.sort_by_key(|f| f.line.unwrap_or(usize::MAX));
        Self {
            path: path.into(),
            findings,
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }
}

/// Load, extract and lint a single grammar file.
///
/// When `changed` is given and reports a non-empty set, parser-rule checks
/// only see the rules it names.
pub fn lint_path(
    linter: &Linter,
    path: &Path,
    changed: Option<&dyn ChangedRules>,
) -> Result<FileReport, GrammarError> {
    let mut grammar = parse_file(path)?;
    if let Some(source) = changed {
        narrow_to_changed(&mut grammar, source);
    }
    let findings = linter.lint(&grammar);
    tracing::debug!(path = %path.display(), findings = findings.len(), "linted");
    Ok(FileReport::new(path, findings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    struct Fixed(&'static [&'static str]);

    impl ChangedRules for Fixed {
        fn changed_rules(&self, _path: &Path) -> HashSet<String> {
            self.0.iter().map(|s| s.to_string()).collect()
        }
    }

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_lint_path_sorts_by_line() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "FooLexer.g4",
            "lexer grammar FooLexer;\nWORD : [a-z]+ ;\nShutdown : 'shutdown' ;\nfragment Digit : [0-9] ;\n",
        );
        let report = lint_path(&Linter::with_default_rules(), &path, None).unwrap();
        let lines: Vec<_> = report.findings.iter().map(|f| f.line).collect();
        let mut sorted = lines.clone();
        sorted.sort();
        assert_eq!(lines, sorted);
        assert_eq!(report.error_count(), 1);
        assert!(report.has_errors());
    }

    #[test]
    fn test_lint_path_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Missing.g4");
        let err = lint_path(&Linter::with_default_rules(), &path, None).unwrap_err();
        assert!(matches!(err, GrammarError::Io { .. }));
    }

    #[test]
    fn test_lint_path_changed_only() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "P.g4",
            "parser grammar P;\naRule : X ;\nbRule : Y ;\ncRule : Z ;\n",
        );
        let linter = Linter::with_default_rules();

        let all = lint_path(&linter, &path, None).unwrap();
        assert!(all.findings.iter().any(|f| f.message.contains("cRule")));

        let narrowed = lint_path(&linter, &path, Some(&Fixed(&["aRule", "bRule"]))).unwrap();
        assert_eq!(narrowed.error_count(), 2);
        assert!(narrowed.findings.iter().all(|f| !f.message.contains("cRule")));
    }

    #[test]
    fn test_file_report_counts() {
        let report = FileReport::new(
            "x.g4",
            vec![
                Finding::new("b", "style", "w", Severity::Warning).with_line(3),
                Finding::new("a", "naming", "e", Severity::Error).with_line(1),
            ],
        );
        assert_eq!(report.findings[0].rule, "a");
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
    }
}
