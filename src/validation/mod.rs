pub mod confidence;
pub mod fields;

pub use confidence::ConfidenceScorer;
pub use fields::FieldExtractor;
