//! Rule documentation for g4-lint
//!
//! Each rule module carries a [`RuleDoc`] explaining the convention it
//! enforces; `g4-lint why <rule>` prints it.

/// Documentation for a lint rule
pub struct RuleDoc {
    /// Rule name (e.g., "parser-rule-case")
    pub name: &'static str,
    /// Category (e.g., "naming")
    pub category: &'static str,
    /// Short description
    pub description: &'static str,
    /// Severity level
    pub severity: &'static str,
    /// Why this rule exists
    pub why: &'static str,
    /// Example of a violating grammar
    pub bad_example: &'static str,
    /// Example of a conforming grammar
    pub good_example: &'static str,
}

/// Get documentation for a rule by name
pub fn get_rule_doc(name: &str) -> Option<&'static RuleDoc> {
    all_rule_docs().iter().find(|doc| doc.name == name).copied()
}

/// Get all rule documentation
pub fn all_rule_docs() -> &'static [&'static RuleDoc] {
    use crate::rules::{
        naming::{fragment_prefix, mode_token_prefix, parser_rule_case, token_case, top_level_prefix},
        structure::{circular_import, keyword_order, newline_in_parent, null_suffix},
        style::{declaration_grouping, declaration_order, first_token_ambiguity},
    };

    static DOCS: &[&RuleDoc] = &[
        // Naming
        &parser_rule_case::DOC,
        &top_level_prefix::DOC,
        &token_case::DOC,
        &fragment_prefix::DOC,
        &mode_token_prefix::DOC,
        // Structure
        &null_suffix::DOC,
        &newline_in_parent::DOC,
        &circular_import::DOC,
        &keyword_order::DOC,
        // Style
        &first_token_ambiguity::DOC,
        &declaration_order::DOC,
        &declaration_grouping::DOC,
    ];

    DOCS
}

/// Get all rule names
pub fn all_rule_names() -> Vec<&'static str> {
    all_rule_docs().iter().map(|doc| doc.name).collect()
}
