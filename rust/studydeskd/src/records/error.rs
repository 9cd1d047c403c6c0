use thiserror::Error;

use super::validate::FieldErrors;
use super::RecordId;

#[derive(Debug, Clone, Error)]
pub enum RecordError {
    #[error("validation failed: {}", .0.field_list())]
    Validation(FieldErrors),

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: RecordId },

    #[error("{kind} form is not open")]
    FormClosed { kind: &'static str },

    #[error("no {kind} is awaiting delete confirmation")]
    NothingToConfirm { kind: &'static str },
}

impl RecordError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_failed",
            Self::NotFound { .. } => "not_found",
            Self::FormClosed { .. } => "form_closed",
            Self::NothingToConfirm { .. } => "nothing_to_confirm",
        }
    }
}
