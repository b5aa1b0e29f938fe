use super::Cli;
use g4_lint::discover::discover;
use g4_lint::{
    ChangedRules, FileReport, GitDiff, GrammarError, LintConfig, Linter, Reporter, lint_path,
};
use rayon::prelude::*;
use std::path::Path;
use std::process::ExitCode;

/// Result of linting a single file
enum FileResult {
    Linted(FileReport),
    Unreadable(GrammarError),
}

fn lint_file(
    path: &Path,
    linter: &Linter,
    changed: Option<&dyn ChangedRules>,
) -> FileResult {
    match lint_path(linter, path, changed) {
        Ok(report) => FileResult::Linted(report),
        Err(e) => FileResult::Unreadable(e),
    }
}

pub fn run_lint(cli: Cli) -> ExitCode {
    // 1. Build configuration from flags
    let mut config = LintConfig::default().with_color_mode(cli.color_mode());
    for name in &cli.disable {
        if let Err(e) = config.disable(name) {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    }
    config.apply_color_mode();

    // 2. Resolve files
    let paths = discover(&cli.files);
    if paths.is_empty() {
        eprintln!("no .g4 files found");
        return ExitCode::SUCCESS;
    }

    if cli.verbose {
        eprintln!("Linting {} file(s)", paths.len());
        for name in config.disabled_rules() {
            eprintln!("  disabled: {}", name);
        }
    }

    // 3. Lint files in parallel; collect preserves input order
    let linter = Linter::with_config(Some(&config));
    let git = GitDiff;
    let changed: Option<&dyn ChangedRules> = if cli.changed_only { Some(&git) } else { None };

    let results: Vec<FileResult> = paths
        .par_iter()
        .map(|path| lint_file(path, &linter, changed))
        .collect();

    // 4. Process results sequentially (for consistent output ordering)
    let mut reports = Vec::with_capacity(results.len());
    let mut has_unreadable = false;
    for result in results {
        match result {
            FileResult::Linted(report) => reports.push(report),
            FileResult::Unreadable(e) => {
                eprintln!("Error: {}", e);
                has_unreadable = true;
            }
        }
    }

    let reporter = Reporter::new(cli.format.into()).with_verbose(cli.verbose);
    reporter.report(&reports);

    if has_unreadable {
        return ExitCode::from(2);
    }

    let has_errors = reports.iter().any(FileReport::has_errors);
    if has_errors && !cli.warn_only {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
