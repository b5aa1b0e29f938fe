pub mod circular_import;
pub mod keyword_order;
pub mod newline_in_parent;
pub mod null_suffix;

pub use circular_import::CircularImport;
pub use keyword_order::KeywordOrder;
pub use newline_in_parent::NewlineInParent;
pub use null_suffix::NullSuffix;
