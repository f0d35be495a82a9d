use lazy_static::lazy_static;
use regex::Regex;

use crate::models::DocumentType;

/// Per-type validation rule: a validity pattern tested against the full
/// recognized text plus the ordered list of fields expected on that document.
pub struct DocumentTypeRule {
    pub document_type: DocumentType,
    pub validity_pattern: Regex,
    pub fields: &'static [&'static str],
}

lazy_static! {
    static ref RULES: Vec<DocumentTypeRule> = vec![
        DocumentTypeRule {
            document_type: DocumentType::NationalId,
            // Bare 10-digit number, or the 3-2-4 hyphenated grouping
            validity_pattern: Regex::new(r"\b\d{10}\b|\b\d{3}-\d{2}-\d{4}\b").unwrap(),
            fields: &["id_number", "name", "date_of_birth", "nationality"],
        },
        DocumentTypeRule {
            document_type: DocumentType::Passport,
            validity_pattern: Regex::new(r"[A-Z]{1,2}\d{6,9}").unwrap(),
            fields: &[
                "passport_number",
                "name",
                "date_of_birth",
                "nationality",
                "expiry_date",
            ],
        },
        DocumentTypeRule {
            document_type: DocumentType::DrivingLicense,
            validity_pattern: Regex::new(r"\b[A-Z]{1,2}\d{6,8}\b").unwrap(),
            fields: &[
                "license_number",
                "name",
                "date_of_birth",
                "license_class",
                "expiry_date",
            ],
        },
    ];
}

impl DocumentTypeRule {
    /// Look up the rule for a document type. The type enum is closed, so a
    /// rule always exists.
    pub fn for_type(document_type: DocumentType) -> &'static DocumentTypeRule {
        RULES
            .iter()
            .find(|rule| rule.document_type == document_type)
            .expect("every document type has a rule entry")
    }
}
