//! Scoping checks to rules declared in a pending change.
//!
//! [`ChangedRules`] answers one question: which parser rules have a newly
//! added declaration line in this file? An empty answer means "no filtering",
//! never an error, so [`NoDiff`] is always a valid substitute for [`GitDiff`].

use g4_lint_grammar::Grammar;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

static ADDED_RULE_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([a-z]\w*)\s*:").unwrap());
static ADDED_BARE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*([a-z]\w*)\s*$").unwrap());

/// Source of newly declared rule names for a file.
pub trait ChangedRules: Send + Sync {
    /// Names of parser rules whose declaration line was added, or an empty
    /// set when nothing is known.
    fn changed_rules(&self, path: &Path) -> HashSet<String>;
}

/// Never reports changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiff;

impl ChangedRules for NoDiff {
    fn changed_rules(&self, _path: &Path) -> HashSet<String> {
        HashSet::new()
    }
}

/// Reads the staged diff of a file, falling back to the unstaged diff.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitDiff;

impl GitDiff {
    /// Run `git diff <extra> -U0 -- <file>` from the file's directory.
    fn diff(&self, path: &Path, extra: &[&str]) -> Option<String> {
        let file_name = path.file_name()?;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        let output = Command::new("git")
            .arg("diff")
            .args(extra)
            .arg("-U0")
            .arg("--")
            .arg(file_name)
            .current_dir(dir)
            .output();

        match output {
            Ok(output) if output.status.success() => String::from_utf8(output.stdout).ok(),
            Ok(output) => {
                tracing::debug!(
                    path = %path.display(),
                    status = %output.status,
                    stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                    "git diff failed"
                );
                None
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "git unavailable");
                None
            }
        }
    }
}

impl ChangedRules for GitDiff {
    fn changed_rules(&self, path: &Path) -> HashSet<String> {
        let staged = self
            .diff(path, &["--cached"])
            .filter(|text| !text.trim().is_empty());

        let text = match staged {
            Some(text) => text,
            None => match self.diff(path, &[]) {
                Some(text) => text,
                None => return HashSet::new(),
            },
        };

        let names = parse_added_rule_names(&text);
        tracing::debug!(path = %path.display(), changed = names.len(), "rules in pending diff");
        names
    }
}

/// Collect rule names declared on added lines of a unified diff.
///
/// Recognizes both `name :` on one added line and a bare `name` immediately
/// followed by an added line starting with `:`.
pub fn parse_added_rule_names(diff: &str) -> HashSet<String> {
    let mut names = HashSet::new();
    let mut pending: Option<&str> = None;

    for line in diff.lines() {
        let Some(added) = line.strip_prefix('+') else {
            pending = None;
            continue;
        };
        if added.starts_with("++") {
            pending = None;
            continue;
        }

        if let Some(name) = pending.take() {
            if added.trim_start().starts_with(':') {
                names.insert(name.to_string());
                continue;
            }
        }

        if let Some(caps) = ADDED_RULE_DECLARATION.captures(added) {
            names.insert(caps[1].to_string());
        } else if let Some(caps) = ADDED_BARE_NAME.captures(added) {
            pending = caps.get(1).map(|m| m.as_str());
        }
    }

    names
}

/// Narrow the grammar's parser rules to those reported as changed.
///
/// Leaves the grammar untouched when the source reports nothing.
pub fn narrow_to_changed(grammar: &mut Grammar, source: &dyn ChangedRules) {
    let changed = source.changed_rules(grammar.path());
    if changed.is_empty() {
        return;
    }
    tracing::debug!(
        path = %grammar.path.display(),
        before = grammar.rules.len(),
        changed = changed.len(),
        "narrowing to changed rules"
    );
    grammar.retain_rules(&changed);
}
