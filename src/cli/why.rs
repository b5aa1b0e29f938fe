use colored::Colorize;
use g4_lint::docs::{RuleDoc, all_rule_docs, get_rule_doc};
use std::process::ExitCode;

pub fn run_why(rule: Option<String>, list: bool) -> ExitCode {
    if list {
        print_rule_list();
        return ExitCode::SUCCESS;
    }

    let Some(rule_name) = rule else {
        eprintln!("Usage: g4-lint why <rule-name>");
        eprintln!("       g4-lint why --list");
        eprintln!();
        eprintln!("Use {} to see all available rules.", "--list".cyan());
        return ExitCode::from(2);
    };

    match get_rule_doc(&rule_name) {
        Some(doc) => {
            print_rule_doc(doc);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("{} Unknown rule: {}", "Error:".red().bold(), rule_name);
            eprintln!();
            eprintln!(
                "Use {} to see all available rules.",
                "g4-lint why --list".cyan()
            );
            ExitCode::from(2)
        }
    }
}

fn print_rule_list() {
    eprintln!("{}", "Available rules:".bold());
    eprintln!();

    for category in g4_lint::RULE_CATEGORIES {
        let rules: Vec<_> = all_rule_docs()
            .iter()
            .filter(|doc| doc.category == *category)
            .collect();
        if rules.is_empty() {
            continue;
        }
        eprintln!("  {} {}", "▸".cyan(), category.bold());
        for doc in rules {
            eprintln!(
                "    {} - {} {}",
                doc.name.yellow(),
                doc.description,
                format!("({})", doc.severity).dimmed()
            );
        }
        eprintln!();
    }

    eprintln!(
        "Use {} to see detailed documentation.",
        "g4-lint why <rule-name>".cyan()
    );
}

fn print_rule_doc(doc: &RuleDoc) {
    eprintln!();
    eprintln!("{} {}", "Rule:".bold(), doc.name.yellow());
    eprintln!("{} {}", "Category:".bold(), doc.category);
    eprintln!("{} {}", "Severity:".bold(), doc.severity);
    eprintln!();
    eprintln!("{}", "Why:".bold());
    for line in doc.why.lines() {
        eprintln!("  {}", line);
    }
    eprintln!();
    eprintln!("{}", "Bad Example:".bold().red());
    eprintln!("{}", "─".repeat(60).dimmed());
    for line in doc.bad_example.lines() {
        eprintln!("  {}", line);
    }
    eprintln!("{}", "─".repeat(60).dimmed());
    eprintln!();
    eprintln!("{}", "Good Example:".bold().green());
    eprintln!("{}", "─".repeat(60).dimmed());
    for line in doc.good_example.lines() {
        eprintln!("  {}", line);
    }
    eprintln!("{}", "─".repeat(60).dimmed());
    eprintln!();
}
