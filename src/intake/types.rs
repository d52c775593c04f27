use serde::{Deserialize, Serialize};

/// Structured reading of a free-text medication sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMedicationInput {
    /// Best-effort medication name. `None` means the sentence was inconclusive.
    pub name: Option<String>,
    /// Matched quantity + unit, e.g. "500mg" or "2 puffs".
    pub dosage: Option<String>,
    /// Canonical frequency label, or "as directed" when nothing matched.
    pub frequency: String,
    /// Comma-joined administration notes.
    pub notes: Option<String>,
}

impl ParsedMedicationInput {
    /// Whether a medication name was recognised.
    pub fn is_conclusive(&self) -> bool {
        self.name.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_serialize_as_null() {
        let parsed = ParsedMedicationInput {
            name: None,
            dosage: None,
            frequency: "as directed".into(),
            notes: None,
        };
        let json = serde_json::to_value(&parsed).unwrap();
        assert!(json["name"].is_null());
        assert!(json["dosage"].is_null());
        assert!(json["notes"].is_null());
        assert_eq!(json["frequency"], "as directed");
        assert!(!parsed.is_conclusive());
    }
}
