use chrono::NaiveDate;
use tracing::warn;
use uuid::Uuid;

use crate::record::Record;
use crate::slot::StorageSlot;

/// Display ordering for [`TodoStore::view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Insertion order, unchanged.
    #[default]
    Insertion,
    /// Completed records first; each group keeps its insertion order.
    CompletedFirst,
    /// Dated records ascending by date, then all dateless records in
    /// insertion order.
    DateAscending,
}

/// The authoritative in-memory todo collection plus its durable mirror.
///
/// Every mutation writes the full collection back to the injected slot, so
/// the list survives a restart. Persistence failures are logged and never
/// surfaced to the caller; a corrupt slot restores as an empty list.
pub struct TodoStore<S: StorageSlot> {
    records: Vec<Record>,
    slot: S,
}

impl<S: StorageSlot> TodoStore<S> {
    /// Restores the collection from the slot.
    ///
    /// An absent value yields an empty collection. A value that does not
    /// parse as a record array is discarded with a diagnostic and also
    /// yields an empty collection.
    pub fn restore(slot: S) -> Self {
        let records = match slot.read() {
            Ok(None) => Vec::new(),
            Ok(Some(contents)) => match serde_json::from_str(&contents) {
                Ok(records) => records,
                Err(err) => {
                    warn!("discarding unparseable stored todos: {err}");
                    Vec::new()
                }
            },
            Err(err) => {
                warn!("failed to read stored todos: {err}");
                Vec::new()
            }
        };
        Self { records, slot }
    }

    /// Appends a new uncompleted record and returns its id.
    ///
    /// Whitespace-only text is rejected: nothing is added or persisted and
    /// `None` is returned.
    pub fn add(&mut self, text: &str, date: Option<NaiveDate>) -> Option<Uuid> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let record = Record::new(text, date);
        let id = record.id;
        self.records.push(record);
        self.persist();
        Some(id)
    }

    /// Flips the completed flag of the matching record.
    ///
    /// Returns false (and persists nothing) when no record matches.
    pub fn toggle_completed(&mut self, id: Uuid) -> bool {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            return false;
        };
        record.completed = !record.completed;
        self.persist();
        true
    }

    /// Removes the matching record.
    ///
    /// Returns false (and persists nothing) when no record matches, so
    /// calling it twice with the same id is harmless.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        if self.records.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Returns the records in the requested display order.
    ///
    /// Sorting only affects the returned view; the stored insertion order is
    /// never mutated. Both sorts are stable, so ties keep insertion order.
    pub fn view(&self, order: SortOrder) -> Vec<&Record> {
        let mut view: Vec<&Record> = self.records.iter().collect();
        match order {
            SortOrder::Insertion => {}
            SortOrder::CompletedFirst => view.sort_by_key(|record| !record.completed),
            SortOrder::DateAscending => {
                // `None` dates must sort after every `Some`, which is the
                // opposite of Option's natural ordering.
                view.sort_by_key(|record| (record.date.is_none(), record.date));
            }
        }
        view
    }

    /// Returns the records in stored insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.records) {
            Ok(json) => {
                if let Err(err) = self.slot.write(&json) {
                    warn!("failed to persist todos: {err}");
                }
            }
            Err(err) => warn!("failed to serialize todos: {err}"),
        }
    }
}
