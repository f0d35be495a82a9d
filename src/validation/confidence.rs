use std::collections::HashMap;

/// Deterministic confidence scoring based on how many of the expected fields
/// were actually extracted. Valid documents score in [0.85, 1.0], invalid
/// ones in [0.3, 0.7].
pub struct ConfidenceScorer;

impl ConfidenceScorer {
    pub fn score(is_valid: bool, fields: &HashMap<String, String>, expected: usize) -> f64 {
        let completeness = Self::field_completeness(fields, expected);
        if is_valid {
            0.85 + 0.15 * completeness
        } else {
            0.3 + 0.4 * completeness
        }
    }

    /// Fraction of expected fields that came back non-empty, in [0, 1].
    fn field_completeness(fields: &HashMap<String, String>, expected: usize) -> f64 {
        if expected == 0 {
            return 0.0;
        }
        let filled = fields.values().filter(|value| !value.is_empty()).count();
        filled as f64 / expected as f64
    }
}
