pub mod helpers;
pub mod naming;
pub mod structure;
pub mod style;

pub use naming::{FragmentPrefix, ModeTokenPrefix, ParserRuleCase, TokenCase, TopLevelPrefix};
pub use structure::{CircularImport, KeywordOrder, NewlineInParent, NullSuffix};
pub use style::{DeclarationGrouping, DeclarationOrder, FirstTokenAmbiguity};
