pub mod data;
pub mod rules;

pub use data::{DocumentType, ValidationResult};
pub use rules::DocumentTypeRule;
