//! Entry list contracts and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered sequence of committed entries.
//! - Keep list mutation limited to prepend and remove-by-id.
//!
//! # Invariants
//! - Order is most-recently-added first; entries are never reordered.
//! - `remove_entry` on a missing id is a no-op, not an error.
//! - Duplicate ids are not rejected; callers generate unique ids.

use crate::model::entry::{Entry, EntryId};

/// Repository interface for the entry list.
pub trait EntryRepository {
    /// Inserts `entry` at the head of the list.
    fn add_entry(&mut self, entry: Entry);
    /// Removes the entry with `id`. Returns whether anything was removed.
    fn remove_entry(&mut self, id: EntryId) -> bool;
    fn get_entry(&self, id: EntryId) -> Option<&Entry>;
    /// Entries in display order (most recent first).
    fn list_entries(&self) -> &[Entry];
    fn count_entries(&self) -> usize;
}

/// Process-memory entry list. Nothing outlives the value.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntryRepository {
    entries: Vec<Entry>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryRepository for InMemoryEntryRepository {
    fn add_entry(&mut self, entry: Entry) {
        self.entries.insert(0, entry);
    }

    fn remove_entry(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    fn get_entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn list_entries(&self) -> &[Entry] {
        &self.entries
    }

    fn count_entries(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{EntryRepository, InMemoryEntryRepository};
    use crate::model::entry::Entry;
    use uuid::Uuid;

    #[test]
    fn add_prepends() {
        let mut repo = InMemoryEntryRepository::new();
        let first = Entry::new("a", "a", "a", "a");
        let second = Entry::new("b", "b", "b", "b");
        repo.add_entry(first.clone());
        repo.add_entry(second.clone());

        assert_eq!(repo.list_entries(), &[second, first]);
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let mut repo = InMemoryEntryRepository::new();
        repo.add_entry(Entry::new("a", "a", "a", "a"));
        let snapshot = repo.list_entries().to_vec();

        assert!(!repo.remove_entry(Uuid::new_v4()));
        assert_eq!(repo.list_entries(), snapshot.as_slice());
        assert_eq!(repo.count_entries(), 1);
    }

    #[test]
    fn duplicate_ids_are_not_rejected() {
        let mut repo = InMemoryEntryRepository::new();
        let entry = Entry::new("a", "a", "a", "a");
        repo.add_entry(entry.clone());
        repo.add_entry(entry);
        assert_eq!(repo.count_entries(), 2);
    }
}
