pub mod patterns;
pub mod types;
pub mod parser;

pub use types::*;
pub use parser::*;

use thiserror::Error;

use crate::config::MAX_NAME_LENGTH;

/// Rejections raised by callers of the parser. The parser itself never fails;
/// these describe sentences that cannot become a medication record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("No text provided")]
    EmptyText,

    #[error("Could not understand medication name. Try: 'Add [medication name] [dosage] [frequency]'")]
    NameNotRecognized,

    #[error("Medication name is {length} characters long (maximum {max})", max = MAX_NAME_LENGTH)]
    NameTooLong { length: usize },
}

impl IntakeError {
    /// Stable machine-readable code for error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            IntakeError::EmptyText => "NO_TEXT",
            IntakeError::NameNotRecognized => "NAME_NOT_RECOGNIZED",
            IntakeError::NameTooLong { .. } => "NAME_TOO_LONG",
        }
    }

    /// Every intake rejection is a bad request, never a server fault.
    pub fn status_code(&self) -> u16 {
        400
    }
}
