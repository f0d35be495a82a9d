use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    // Long digit runs, the usual shape of national ID numbers
    static ref NUMBER_PATTERN: Regex = Regex::new(r"\b\d{8,12}\b").unwrap();
    // Letter-prefixed numbers as printed on passports and licenses
    static ref LETTER_NUMBER_PATTERN: Regex = Regex::new(r"[A-Z]{1,2}\d{6,9}").unwrap();
    // Two consecutive capitalized words
    static ref NAME_PATTERN: Regex = Regex::new(r"[A-Z][a-z]+ [A-Z][a-z]+").unwrap();
    // D/M/YYYY-shaped dates with slash or hyphen separators
    static ref DATE_PATTERN: Regex = Regex::new(r"\d{1,2}[/-]\d{1,2}[/-]\d{4}").unwrap();
}

// Nationality adjectives the front desk commonly sees, checked in this order
const NATIONALITIES: [&str; 5] = ["SAUDI", "AMERICAN", "BRITISH", "EGYPTIAN", "EMIRATE"];

pub struct FieldExtractor;

impl FieldExtractor {
    /// Scan recognized text for each requested field, best effort. Fields
    /// with no match come back as empty strings so the review UI can still
    /// render a complete form.
    pub fn extract_fields(text: &str, fields: &[&str]) -> HashMap<String, String> {
        let mut extracted = HashMap::new();
        for &field in fields {
            let value = Self::extract_field(text, field);
            debug!("field {}: {:?}", field, value);
            extracted.insert(field.to_string(), value);
        }
        extracted
    }

    fn extract_field(text: &str, field: &str) -> String {
        match field {
            "id_number" | "passport_number" | "license_number" => {
                Self::extract_document_number(text)
            }
            "name" => Self::extract_name(text),
            "date_of_birth" | "expiry_date" => Self::extract_date(text),
            "nationality" => Self::extract_nationality(text),
            _ => String::new(),
        }
    }

    /// First long digit run, falling back to a letter-prefixed number when
    /// the document prints no bare numeric ID.
    pub fn extract_document_number(text: &str) -> String {
        NUMBER_PATTERN
            .find(text)
            .or_else(|| LETTER_NUMBER_PATTERN.find(text))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn extract_name(text: &str) -> String {
        NAME_PATTERN
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn extract_date(text: &str) -> String {
        DATE_PATTERN
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// Case-insensitive lookup against the known nationality adjectives,
    /// reported in canonical uppercase.
    pub fn extract_nationality(text: &str) -> String {
        let upper = text.to_uppercase();
        NATIONALITIES
            .iter()
            .find(|country| upper.contains(*country))
            .map(|country| country.to_string())
            .unwrap_or_default()
    }
}
