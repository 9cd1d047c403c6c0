use super::{project, ConfirmOverlay, Entity, FormOverlay, Query, RecordError, RecordId, RecordStore};

/// One page worth of state: the store plus its two overlays.
pub struct RecordManager<E: Entity> {
    pub store: RecordStore<E>,
    pub form: FormOverlay<E>,
    pub confirm: ConfirmOverlay<E>,
}

impl<E: Entity> RecordManager<E> {
    pub fn new(store: RecordStore<E>) -> Self {
        Self {
            store,
            form: FormOverlay::default(),
            confirm: ConfirmOverlay::default(),
        }
    }

    pub fn visible(&self, query: &Query) -> Vec<E> {
        project(self.store.list(), query)
    }

    pub fn open_edit(&mut self, id: RecordId) -> Result<(), RecordError> {
        let record = self.store.get(id)?.clone();
        self.form.open_edit(&record);
        Ok(())
    }

    pub fn request_delete(&mut self, id: RecordId) -> Result<(), RecordError> {
        let record = self.store.get(id)?.clone();
        self.confirm.open(record);
        Ok(())
    }

    pub fn confirm_delete(&mut self) -> Result<E, RecordError> {
        let removed = self.confirm.confirm(&mut self.store)?;
        tracing::info!(kind = E::KIND, id = removed.id(), "record removed after confirmation");
        Ok(removed)
    }

    /// Drops any open draft and any pending delete.
    pub fn close_overlays(&mut self) {
        self.form.cancel();
        self.confirm.dismiss();
    }

    pub fn deleted_notice() -> String {
        format!("{} deleted successfully", E::LABEL)
    }
}
