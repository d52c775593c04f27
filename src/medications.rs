//! Natural-language medication entry.
//!
//! Two entry points sit on top of the parser:
//! - `create_medication_from_text`: parse, validate and build a record
//! - `preview_medication_text`: parse only, so the user can check the reading
//!
//! Storing the record is left to the caller.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::config::{DEFAULT_DOSAGE, MAX_NAME_LENGTH};
use crate::intake::{parse_medication_input, IntakeError, ParsedMedicationInput};
use crate::models::Medication;

pub const CREATED_MESSAGE: &str = "Medication added successfully!";
pub const PREVIEW_TIP: &str = "If this looks correct, add it to create the medication.";

/// Result of creating a medication from a sentence.
#[derive(Debug, Clone, Serialize)]
pub struct NaturalMedicationOutcome {
    pub success: bool,
    pub message: String,
    pub medication: Medication,
    pub parsed_from: String,
    pub understood_as: ParsedMedicationInput,
}

/// Dry-run result: what the parser understood, nothing created.
#[derive(Debug, Clone, Serialize)]
pub struct ParsePreview {
    pub original_text: String,
    pub understood_as: ParsedMedicationInput,
    pub tip: String,
}

/// Parse `text` and build an active medication starting on `today`.
/// Absent dosage is stored as "as directed".
pub fn create_medication_from_text(
    text: &str,
    today: NaiveDate,
) -> Result<NaturalMedicationOutcome, IntakeError> {
    if text.trim().is_empty() {
        return Err(IntakeError::EmptyText);
    }

    let parsed = parse_medication_input(text);

    if !parsed.is_conclusive() {
        tracing::warn!(input_len = text.len(), "Medication name not recognised");
        return Err(IntakeError::NameNotRecognized);
    }
    let name = parsed.name.clone().unwrap_or_default();

    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        tracing::warn!(length, "Recognised medication name too long");
        return Err(IntakeError::NameTooLong { length });
    }

    let medication = Medication {
        id: Uuid::new_v4(),
        name,
        dosage: parsed
            .dosage
            .clone()
            .unwrap_or_else(|| DEFAULT_DOSAGE.to_string()),
        frequency: parsed.frequency.clone(),
        start_date: today,
        end_date: None,
        is_active: true,
        notes: parsed.notes.clone(),
    };

    tracing::info!(
        medication_id = %medication.id,
        frequency = %medication.frequency,
        "Medication created from natural language"
    );

    Ok(NaturalMedicationOutcome {
        success: true,
        message: CREATED_MESSAGE.to_string(),
        medication,
        parsed_from: text.to_string(),
        understood_as: parsed,
    })
}

/// Same as [`create_medication_from_text`], dated with the local calendar day.
pub fn create_medication_from_text_today(
    text: &str,
) -> Result<NaturalMedicationOutcome, IntakeError> {
    create_medication_from_text(text, chrono::Local::now().date_naive())
}

/// Parse without creating anything. Inconclusive readings are returned as-is.
pub fn preview_medication_text(text: &str) -> Result<ParsePreview, IntakeError> {
    if text.trim().is_empty() {
        return Err(IntakeError::EmptyText);
    }

    Ok(ParsePreview {
        original_text: text.to_string(),
        understood_as: parse_medication_input(text),
        tip: PREVIEW_TIP.to_string(),
    })
}
