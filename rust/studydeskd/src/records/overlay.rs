use serde::Serialize;

use super::{Entity, FieldErrors, FormMode, RecordError, RecordId, RecordStore};

/// Add/edit form. A draft only reaches the store through `submit`; closing
/// the form in any other way drops it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum FormOverlay<E: Entity> {
    Closed,
    #[serde(rename_all = "camelCase")]
    Open {
        mode: FormMode,
        target: Option<RecordId>,
        draft: E::Draft,
        errors: FieldErrors,
    },
}

impl<E: Entity> Default for FormOverlay<E> {
    fn default() -> Self {
        Self::Closed
    }
}

/// Outcome of a successful submit.
#[derive(Debug, Clone)]
pub enum Submitted<E> {
    Created(E),
    Updated(E),
}

impl<E: Entity> Submitted<E> {
    pub fn record(&self) -> &E {
        match self {
            Self::Created(r) | Self::Updated(r) => r,
        }
    }

    pub fn notice(&self) -> String {
        match self {
            Self::Created(_) => format!("{} added successfully", E::LABEL),
            Self::Updated(_) => format!("{} updated successfully", E::LABEL),
        }
    }
}

impl<E: Entity> FormOverlay<E> {
    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn open_create(&mut self) {
        *self = Self::Open {
            mode: FormMode::Create,
            target: None,
            draft: E::Draft::default(),
            errors: FieldErrors::new(),
        };
    }

    pub fn open_edit(&mut self, record: &E) {
        *self = Self::Open {
            mode: FormMode::Edit,
            target: Some(record.id()),
            draft: record.to_draft(),
            errors: FieldErrors::new(),
        };
    }

    /// Replaces the draft and clears the message on the field being edited.
    pub fn change(&mut self, next: E::Draft, field: Option<&str>) -> Result<(), RecordError> {
        let Self::Open { draft, errors, .. } = self else {
            return Err(RecordError::FormClosed { kind: E::KIND });
        };
        *draft = next;
        if let Some(field) = field {
            errors.clear_field(field);
        }
        Ok(())
    }

    /// Validates and commits. On a validation failure the form stays open
    /// with the error mapping filled in and the store is not touched. A
    /// vanished edit target closes the form.
    pub fn submit(
        &mut self,
        store: &mut RecordStore<E>,
        next: Option<E::Draft>,
    ) -> Result<Submitted<E>, RecordError> {
        let Self::Open {
            mode,
            target,
            draft,
            errors,
        } = self
        else {
            return Err(RecordError::FormClosed { kind: E::KIND });
        };
        if let Some(next) = next {
            *draft = next;
        }

        let outcome = match (*mode, *target) {
            (FormMode::Edit, Some(id)) => store.update(id, draft).map(Submitted::Updated),
            _ => store.create(draft).map(Submitted::Created),
        };

        match outcome {
            Ok(done) => {
                *self = Self::Closed;
                Ok(done)
            }
            Err(RecordError::Validation(fields)) => {
                *errors = fields.clone();
                Err(RecordError::Validation(fields))
            }
            Err(e) => {
                *self = Self::Closed;
                Err(e)
            }
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }
}

/// Delete confirmation. Independent of the form overlay.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", content = "record", rename_all = "camelCase")]
pub enum ConfirmOverlay<E: Entity> {
    Closed,
    Confirming(E),
}

impl<E: Entity> Default for ConfirmOverlay<E> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<E: Entity> ConfirmOverlay<E> {
    pub fn open(&mut self, record: E) {
        *self = Self::Confirming(record);
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<&E> {
        match self {
            Self::Confirming(r) => Some(r),
            Self::Closed => None,
        }
    }

    /// Deletes the pending record. The overlay closes whatever the outcome.
    pub fn confirm(&mut self, store: &mut RecordStore<E>) -> Result<E, RecordError> {
        let state = std::mem::take(self);
        let Self::Confirming(record) = state else {
            return Err(RecordError::NothingToConfirm { kind: E::KIND });
        };
        store.delete(record.id())
    }

    pub fn dismiss(&mut self) {
        *self = Self::Closed;
    }
}
