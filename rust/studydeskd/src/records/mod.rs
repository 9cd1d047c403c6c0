//! Generic record manager: one store, one projection, one pair of overlays,
//! parameterized per page by an [`Entity`] schema.

mod error;
mod manager;
mod overlay;
mod projection;
mod store;
pub mod validate;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use error::RecordError;
pub use manager::RecordManager;
pub use overlay::{ConfirmOverlay, FormOverlay};
pub use projection::{project, Query, SortDirection, SortSpec, SortValue};
pub use store::RecordStore;
pub use validate::FieldErrors;

pub type RecordId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormMode {
    Create,
    Edit,
}

/// Schema of one record type.
///
/// `Draft` is the raw form payload held by an open overlay. `Fields` is what
/// survives validation; only `validate` can produce it, so a record is never
/// assembled from unchecked input.
pub trait Entity: Clone + Serialize {
    type Draft: Clone + Default + Serialize + DeserializeOwned;
    type Fields;

    /// Lowercase kind used in logs and error messages.
    const KIND: &'static str;
    /// Display label used in notices.
    const LABEL: &'static str;
    const FILTER_FIELDS: &'static [&'static str];
    const SORT_KEYS: &'static [&'static str];

    fn id(&self) -> RecordId;
    fn created_on(&self) -> NaiveDate;

    fn validate(draft: &Self::Draft, mode: FormMode) -> Result<Self::Fields, FieldErrors>;
    fn assemble(id: RecordId, created_on: NaiveDate, fields: Self::Fields) -> Self;

    /// Validation for an update of `self`. Entities whose rules depend on the
    /// stored record override this.
    fn validate_revision(&self, draft: &Self::Draft) -> Result<Self::Fields, FieldErrors> {
        Self::validate(draft, FormMode::Edit)
    }

    /// Whole-record replacement for an update. Identity and creation date
    /// always carry over.
    fn revise(&self, fields: Self::Fields) -> Self {
        Self::assemble(self.id(), self.created_on(), fields)
    }

    fn to_draft(&self) -> Self::Draft;

    /// Text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;
    fn filter_value(&self, field: &str) -> Option<&str>;
    fn sort_value(&self, key: &str) -> Option<SortValue>;

    fn default_sort() -> Option<SortSpec> {
        None
    }
}
