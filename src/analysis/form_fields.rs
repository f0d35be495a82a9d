use log::debug;
use serde::Serialize;

/// A form field the analyzer believes is present in the recognized text,
/// with a per-field confidence and whether the review form treats it as
/// required.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormFieldHint {
    pub name: &'static str,
    pub confidence: f64,
    pub required: bool,
}

// Keyword pairs are English/Arabic, matched as literal substrings the way
// OCR output prints them.
struct FieldKeyword {
    keywords: [&'static str; 2],
    name: &'static str,
    confidence: f64,
    required: bool,
}

const FIELD_KEYWORDS: [FieldKeyword; 4] = [
    FieldKeyword {
        keywords: ["Name", "الاسم"],
        name: "name",
        confidence: 0.9,
        required: true,
    },
    FieldKeyword {
        keywords: ["Date", "تاريخ"],
        name: "date",
        confidence: 0.85,
        required: true,
    },
    FieldKeyword {
        keywords: ["ID", "رقم"],
        name: "id_number",
        confidence: 0.95,
        required: true,
    },
    FieldKeyword {
        keywords: ["Address", "عنوان"],
        name: "address",
        confidence: 0.8,
        required: false,
    },
];

/// Detect which form fields the text appears to carry, bilingual.
pub fn detect_form_fields(text: &str) -> Vec<FormFieldHint> {
    let mut hints = Vec::new();
    for entry in &FIELD_KEYWORDS {
        if entry.keywords.iter().any(|kw| text.contains(kw)) {
            debug!("form field hint: {}", entry.name);
            hints.push(FormFieldHint {
                name: entry.name,
                confidence: entry.confidence,
                required: entry.required,
            });
        }
    }
    hints
}

pub(crate) fn required_field_count() -> usize {
    FIELD_KEYWORDS.iter().filter(|k| k.required).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_english_keywords() {
        let hints = detect_form_fields("Name: John Smith, ID 1234567890");
        let names: Vec<_> = hints.iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["name", "id_number"]);
    }

    #[test]
    fn detects_arabic_keywords() {
        let hints = detect_form_fields("الاسم: جون سميث رقم ١٢٣٤");
        let names: Vec<_> = hints.iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["name", "id_number"]);
    }

    #[test]
    fn address_is_optional() {
        let hints = detect_form_fields("Address: 1 Main St");
        assert_eq!(hints.len(), 1);
        assert!(!hints[0].required);
    }

    #[test]
    fn empty_text_yields_no_hints() {
        assert!(detect_form_fields("").is_empty());
    }
}
