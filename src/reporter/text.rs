use crate::{FileReport, Finding};
use colored::Colorize;
use std::fmt::Write;

const BANNER_WIDTH: usize = 60;

pub(crate) fn format(reports: &[FileReport], verbose: bool) -> String {
    let mut out = String::new();
    let banner = "=".repeat(BANNER_WIDTH);

    for report in reports {
        let errors: Vec<_> = report.errors().collect();
        let warnings: Vec<_> = report.warnings().collect();

        if errors.is_empty() && !(verbose && !warnings.is_empty()) {
            continue;
        }

        let _ = writeln!(out, "{}", banner);
        let _ = writeln!(out, "File: {}", report.path.display().to_string().bold());
        let _ = writeln!(out, "{}", banner);

        if !errors.is_empty() {
            let _ = writeln!(out, "{}", format!("Errors ({}):", errors.len()).red().bold());
            write_list(&mut out, &errors);
        }
        if verbose && !warnings.is_empty() {
            let _ = writeln!(
                out,
                "{}",
                format!("Warnings ({}):", warnings.len()).yellow().bold()
            );
            write_list(&mut out, &warnings);
        }
        out.push('\n');
    }

    out.push_str(&summary(reports));
    out
}

fn write_list(out: &mut String, findings: &[&Finding]) {
    for (i, finding) in findings.iter().enumerate() {
        let _ = writeln!(out, "  {}", format_item(i + 1, finding));
    }
}

fn format_item(number: usize, finding: &Finding) -> String {
    let location = match finding.line {
        Some(line) => format!("[line {}] ", line),
        None => String::new(),
    };
    format!(
        "{}. {}[{}/{}] {}",
        number, location, finding.category, finding.rule, finding.message
    )
}

fn summary(reports: &[FileReport]) -> String {
    let errors: usize = reports.iter().map(FileReport::error_count).sum();
    let warnings: usize = reports.iter().map(FileReport::warning_count).sum();

    if errors == 0 && warnings == 0 {
        return format!(
            "{}",
            format!("No convention violations found in {} file(s).", reports.len()).green()
        );
    }

    format!(
        "Found {} error(s) and {} warning(s) in {} file(s).",
        errors,
        warnings,
        reports.len()
    )
}
