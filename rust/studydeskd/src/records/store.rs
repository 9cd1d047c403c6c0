use chrono::NaiveDate;

use super::{Entity, FormMode, RecordError, RecordId};

/// Source of creation dates.
pub type Clock = fn() -> NaiveDate;

pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Canonical ordered collection for one entity type.
///
/// New records are appended. Ids come from a counter that starts above the
/// highest seeded id and only grows, so a deleted id is never handed out
/// again. Every successful mutation bumps `revision`.
pub struct RecordStore<E: Entity> {
    records: Vec<E>,
    next_id: RecordId,
    revision: u64,
    clock: Clock,
}

impl<E: Entity> RecordStore<E> {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    pub fn seeded(records: Vec<E>) -> Self {
        let next_id = records.iter().map(Entity::id).max().unwrap_or(0) + 1;
        Self {
            records,
            next_id,
            revision: 0,
            clock: local_today,
        }
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn list(&self) -> &[E] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: RecordId) -> Result<&E, RecordError> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .ok_or(RecordError::NotFound { kind: E::KIND, id })
    }

    fn position(&self, id: RecordId) -> Result<usize, RecordError> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(RecordError::NotFound { kind: E::KIND, id })
    }

    pub fn create(&mut self, draft: &E::Draft) -> Result<E, RecordError> {
        let fields = E::validate(draft, FormMode::Create).map_err(RecordError::Validation)?;
        let id = self.next_id;
        self.next_id += 1;
        let record = E::assemble(id, (self.clock)(), fields);
        self.records.push(record.clone());
        self.revision += 1;
        tracing::debug!(kind = E::KIND, id, "record created");
        Ok(record)
    }

    pub fn update(&mut self, id: RecordId, draft: &E::Draft) -> Result<E, RecordError> {
        let pos = self.position(id)?;
        let fields = self.records[pos]
            .validate_revision(draft)
            .map_err(RecordError::Validation)?;
        let record = self.records[pos].revise(fields);
        self.records[pos] = record.clone();
        self.revision += 1;
        tracing::debug!(kind = E::KIND, id, "record updated");
        Ok(record)
    }

    /// Not idempotent: deleting an id that is already gone is `NotFound`.
    pub fn delete(&mut self, id: RecordId) -> Result<E, RecordError> {
        let pos = self.position(id)?;
        let removed = self.records.remove(pos);
        self.revision += 1;
        tracing::debug!(kind = E::KIND, id, "record deleted");
        Ok(removed)
    }
}

impl<E: Entity> Default for RecordStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::assignment::{self, Assignment, AssignmentDraft, AssignmentStatus};

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date")
    }

    fn draft(title: &str, due: &str) -> AssignmentDraft {
        AssignmentDraft {
            title: title.to_string(),
            due_date: due.to_string(),
            ..AssignmentDraft::default()
        }
    }

    #[test]
    fn create_appends_with_fresh_id_and_creation_date() {
        let mut store = RecordStore::seeded(assignment::seed()).with_clock(fixed_day);
        let before = store.len();

        let mut d = draft("  Lab Report ", "2024-03-10");
        d.description = "Write up the titration lab".into();
        d.subject = "Chemistry".into();
        let created = store.create(&d).expect("create");

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.list().last().map(|a| a.id), Some(created.id));
        assert!(store.list()[..before].iter().all(|a| a.id != created.id));
        assert_eq!(created.title, "  Lab Report ");
        assert_eq!(created.description, "Write up the titration lab");
        assert_eq!(created.subject, "Chemistry");
        assert_eq!(created.status, AssignmentStatus::Pending);
        assert_eq!(created.created_on, fixed_day());
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn failed_create_leaves_collection_untouched() {
        let mut store = RecordStore::seeded(assignment::seed());
        let err = store.create(&draft(" ", "")).expect_err("invalid");
        match err {
            RecordError::Validation(fields) => {
                assert_eq!(fields.get("title"), Some("Title is required"));
                assert_eq!(fields.get("dueDate"), Some("Due date is required"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.len(), 3);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn update_replaces_fields_and_keeps_identity() {
        let mut store = RecordStore::seeded(assignment::seed());
        let original: Assignment = store.get(2).expect("seeded").clone();

        let mut d = original.to_draft();
        d.title = "Science Fair Project".into();
        d.status = AssignmentStatus::Completed;
        let updated = store.update(2, &d).expect("update");

        assert_eq!(updated.id, 2);
        assert_eq!(updated.created_on, original.created_on);
        assert_eq!(updated.title, "Science Fair Project");
        assert_eq!(updated.status, AssignmentStatus::Completed);
        assert_eq!(store.get(2).expect("still there").title, "Science Fair Project");
        assert_eq!(store.list()[1].id, 2, "position preserved");
    }

    #[test]
    fn update_missing_id_is_not_found_before_validation() {
        let mut store: RecordStore<Assignment> = RecordStore::new();
        let err = store.update(42, &AssignmentDraft::default()).expect_err("missing");
        assert!(matches!(err, RecordError::NotFound { id: 42, .. }));
    }

    #[test]
    fn double_delete_fails() {
        let mut store = RecordStore::seeded(assignment::seed());
        store.delete(1).expect("first delete");
        let err = store.delete(1).expect_err("second delete");
        assert!(matches!(err, RecordError::NotFound { id: 1, .. }));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut store = RecordStore::seeded(assignment::seed());
        let a = store.create(&draft("A", "2024-01-01")).expect("a");
        store.delete(a.id).expect("delete a");
        let b = store.create(&draft("B", "2024-01-02")).expect("b");
        assert!(b.id > a.id);
        assert_eq!(a.id, 4);
    }
}
