use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskdocError {
    #[error("Unsupported document type: {0}")]
    UnsupportedDocumentType(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
