pub mod error;

pub use error::DeskdocError;
