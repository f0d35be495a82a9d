pub mod analysis;
pub mod document_validator;
pub mod models;
pub mod utils;
pub mod validation;

pub use document_validator::DocumentValidator;
