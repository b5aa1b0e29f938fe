pub mod fragment_prefix;
pub mod mode_token_prefix;
pub mod parser_rule_case;
pub mod token_case;
pub mod top_level_prefix;

pub use fragment_prefix::FragmentPrefix;
pub use mode_token_prefix::ModeTokenPrefix;
pub use parser_rule_case::ParserRuleCase;
pub use token_case::TokenCase;
pub use top_level_prefix::TopLevelPrefix;
