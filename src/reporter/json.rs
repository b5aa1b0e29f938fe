use crate::{FileReport, Finding, Severity};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    files: Vec<JsonFile<'a>>,
    summary: Summary,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    findings: Vec<&'a Finding>,
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    errors: usize,
    warnings: usize,
}

pub(crate) fn format(reports: &[FileReport], verbose: bool) -> String {
    let files = reports
        .iter()
        .map(|report| JsonFile {
            path: report.path.display().to_string(),
            findings: report
                .findings
                .iter()
                .filter(|f| verbose || f.severity == Severity::Error)
                .collect(),
        })
        .filter(|file| !file.findings.is_empty())
        .collect();

    let report = JsonReport {
        files,
        summary: Summary {
            files: reports.len(),
            errors: reports.iter().map(FileReport::error_count).sum(),
            warnings: reports.iter().map(FileReport::warning_count).sum(),
        },
    };

    // Only strings and integers; serialization cannot fail
    serde_json::to_string_pretty(&report).unwrap_or_default()
}
