use log::debug;

use crate::models::{DocumentType, DocumentTypeRule, ValidationResult};
use crate::utils::DeskdocError;
use crate::validation::{ConfidenceScorer, FieldExtractor};

pub struct DocumentValidator;

impl DocumentValidator {
    pub fn new() -> Self {
        DocumentValidator
    }

    /// Validate recognized text against a document type tag as the UI sends
    /// it ("nationalID", "passport", "drivingLicense"). An unrecognized tag
    /// is the only hard error; everything else degrades to a low-confidence
    /// result.
    pub fn validate(&self, text: &str, document_type: &str) -> Result<ValidationResult, DeskdocError> {
        let document_type: DocumentType = document_type.parse()?;
        Ok(self.validate_typed(text, document_type))
    }

    /// Validation proper. With the type already resolved nothing can fail.
    pub fn validate_typed(&self, text: &str, document_type: DocumentType) -> ValidationResult {
        let rule = DocumentTypeRule::for_type(document_type);

        let is_valid = rule.validity_pattern.is_match(text);
        debug!("{} validity pattern matched: {}", document_type, is_valid);

        // Field extraction runs regardless of validity so the reviewer sees
        // whatever could be salvaged from noisy OCR text.
        let fields = FieldExtractor::extract_fields(text, rule.fields);
        let confidence = ConfidenceScorer::score(is_valid, &fields, rule.fields.len());

        let issues = if is_valid {
            Vec::new()
        } else {
            vec![
                "Invalid document format".to_string(),
                "Missing required fields".to_string(),
            ]
        };

        ValidationResult {
            is_valid,
            confidence,
            document_type,
            fields,
            issues,
        }
    }
}

impl Default for DocumentValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn national_id_with_ten_digit_run_is_valid() {
        let validator = DocumentValidator::new();
        let result = validator
            .validate("Name: John Smith ID 1234567890 DOB 05/12/1990 SAUDI", "nationalID")
            .unwrap();

        assert!(result.is_valid);
        assert_eq!(result.fields["name"], "John Smith");
        assert_eq!(result.fields["id_number"], "1234567890");
        assert_eq!(result.fields["date_of_birth"], "05/12/1990");
        assert_eq!(result.field("nationality"), Some("SAUDI"));
        assert!(result.issues.is_empty());
        assert!(result.confidence >= 0.85 && result.confidence <= 1.0);
    }

    #[test]
    fn hyphenated_national_id_is_valid() {
        let validator = DocumentValidator::new();
        let result = validator.validate("ID: 123-45-6789", "nationalID").unwrap();
        assert!(result.is_valid);
    }

    #[test]
    fn unsupported_type_is_a_hard_error() {
        let validator = DocumentValidator::new();
        let err = validator.validate("anything", "unknown").unwrap_err();
        assert!(matches!(err, DeskdocError::UnsupportedDocumentType(ref t) if t == "unknown"));
    }

    #[test]
    fn empty_passport_text_degrades_gracefully() {
        let validator = DocumentValidator::new();
        let result = validator.validate("", "passport").unwrap();

        assert!(!result.is_valid);
        assert!(result.fields.values().all(|v| v.is_empty()));
        assert_eq!(result.field("name"), None);
        assert_eq!(
            result.issues,
            vec!["Invalid document format", "Missing required fields"]
        );
        assert!(result.confidence >= 0.3 && result.confidence <= 0.7);
    }

    #[test]
    fn passport_without_letter_number_token_is_invalid() {
        let validator = DocumentValidator::new();
        let result = validator
            .validate("Name: Jane Doe DOB 01/02/1985", "passport")
            .unwrap();
        assert!(!result.is_valid);
        assert!(!result.issues.is_empty());
        // Extraction still salvages what it can
        assert_eq!(result.fields["name"], "Jane Doe");
    }

    #[test]
    fn driving_license_extracts_letter_prefixed_number() {
        let validator = DocumentValidator::new();
        let result = validator
            .validate("License A1234567 Class C John Smith 01/01/2030", "drivingLicense")
            .unwrap();
        assert!(result.is_valid);
        assert_eq!(result.fields["license_number"], "A1234567");
        // license_class has no extraction pattern, comes back empty
        assert_eq!(result.fields["license_class"], "");
    }

    #[test]
    fn text_variations_never_error_for_known_types() {
        let validator = DocumentValidator::new();
        for text in ["", "garbage", "عربي فقط", "1234567890", "\n\t"] {
            for &doc_type in DocumentType::all() {
                validator.validate(text, doc_type.as_str()).unwrap();
            }
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let validator = DocumentValidator::new();
        let text = "Passport AB1234567 John Smith BRITISH 05/12/1990 01/01/2030";
        let first = validator.validate(text, "passport").unwrap();
        let second = validator.validate(text, "passport").unwrap();

        assert_eq!(first.is_valid, second.is_valid);
        assert_eq!(first.confidence, second.confidence);
        assert_eq!(first.fields, second.fields);
        assert_eq!(first.issues, second.issues);
    }
}
