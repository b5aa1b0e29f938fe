//! Grammar file discovery for the command line.

use glob::{Pattern, glob};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// File extension of grammar files
pub const GRAMMAR_EXTENSION: &str = "g4";

/// Resolve command-line arguments to the list of grammar files to lint.
///
/// Explicit files are kept in the order given, whatever their extension.
/// Directories are searched recursively for `*.g4` files, which are sorted.
/// With no arguments the current directory is searched. Paths are deduplicated.
pub fn discover(args: &[PathBuf]) -> Vec<PathBuf> {
    if args.is_empty() {
        return find_grammars(Path::new("."));
    }

    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut paths = Vec::new();

    for arg in args {
        let found = if arg.is_dir() {
            find_grammars(arg)
        } else {
            vec![arg.clone()]
        };
        for path in found {
            if seen.insert(path.clone()) {
                paths.push(path);
            }
        }
    }

    paths
}

/// All `*.g4` files below `dir`, sorted.
fn find_grammars(dir: &Path) -> Vec<PathBuf> {
    let base = if dir == Path::new(".") {
        String::new()
    } else {
        let escaped = Pattern::escape(&dir.to_string_lossy().replace('\\', "/"));
        format!("{}/", escaped.trim_end_matches('/'))
    };
    let pattern = format!("{}**/*.{}", base, GRAMMAR_EXTENSION);

    let mut paths: Vec<PathBuf> = match glob(&pattern) {
        Ok(entries) => entries.flatten().filter(|p| p.is_file()).collect(),
        Err(e) => {
            tracing::warn!(pattern = %pattern, error = %e, "invalid search pattern");
            Vec::new()
        }
    };

    // Sort for consistent ordering
    paths.sort();
    tracing::debug!(dir = %dir.display(), count = paths.len(), "discovered grammar files");
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, rel: &str) -> PathBuf {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "parser grammar X;\n").unwrap();
        path
    }

    #[test]
    fn test_directory_is_searched_recursively_and_sorted() {
        let dir = TempDir::new().unwrap();
        let b = touch(&dir, "b/BParser.g4");
        let a = touch(&dir, "AParser.g4");
        let nested = touch(&dir, "b/c/CLexer.g4");
        touch(&dir, "notes.txt");

        let found = discover(&[dir.path().to_path_buf()]);
        assert_eq!(found, vec![a, b, nested]);
    }

    #[test]
    fn test_explicit_files_keep_order_and_dedupe() {
        let dir = TempDir::new().unwrap();
        let a = touch(&dir, "A.g4");
        let z = touch(&dir, "Z.g4");

        let found = discover(&[z.clone(), a.clone(), z.clone()]);
        assert_eq!(found, vec![z, a]);
    }

    #[test]
    fn test_missing_explicit_file_is_kept() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("Missing.g4");
        assert_eq!(discover(&[missing.clone()]), vec![missing]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(discover(&[dir.path().to_path_buf()]).is_empty());
    }
}
