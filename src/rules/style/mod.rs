pub mod declaration_grouping;
pub mod declaration_order;
pub mod first_token_ambiguity;

pub use declaration_grouping::DeclarationGrouping;
pub use declaration_order::DeclarationOrder;
pub use first_token_ambiguity::FirstTokenAmbiguity;
