use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::DeskdocError;

/// Identity-document categories the front desk accepts for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "nationalID")]
    NationalId,
    #[serde(rename = "passport")]
    Passport,
    #[serde(rename = "drivingLicense")]
    DrivingLicense,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::NationalId => "nationalID",
            DocumentType::Passport => "passport",
            DocumentType::DrivingLicense => "drivingLicense",
        }
    }

    pub fn all() -> &'static [DocumentType] {
        &[
            DocumentType::NationalId,
            DocumentType::Passport,
            DocumentType::DrivingLicense,
        ]
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = DeskdocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nationalID" => Ok(DocumentType::NationalId),
            "passport" => Ok(DocumentType::Passport),
            "drivingLicense" => Ok(DocumentType::DrivingLicense),
            other => Err(DeskdocError::UnsupportedDocumentType(other.to_string())),
        }
    }
}

/// Outcome of validating recognized text against a declared document type.
///
/// Built fresh on every validation call and handed to the review UI; it is
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub confidence: f64,
    pub document_type: DocumentType,
    pub fields: HashMap<String, String>,
    pub issues: Vec<String>,
}

impl ValidationResult {
    /// Field value by name; empty string counts as absent.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}
