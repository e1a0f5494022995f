//! Entry list use-case service.
//!
//! # Responsibility
//! - Provide the add/remove/count entry points used by the form and views.
//! - Delegate list storage to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository ordering contracts.
//! - Logs carry ids and counts only, never field values.

use crate::model::entry::{Entry, EntryId};
use crate::repo::entry_repo::EntryRepository;
use log::{debug, info};

/// Use-case service wrapper for the entry list.
#[derive(Debug, Clone, Default)]
pub struct EntryService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts an entry at the head of the list.
    pub fn add(&mut self, entry: Entry) -> EntryId {
        let id = entry.id;
        self.repo.add_entry(entry);
        info!(
            "event=entry_added module=entry_service status=ok entry_id={} count={}",
            id,
            self.repo.count_entries()
        );
        id
    }

    /// Removes the entry with `id` if present.
    ///
    /// Returns `false` for an unknown id; that case is not an error.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let removed = self.repo.remove_entry(id);
        if removed {
            info!(
                "event=entry_removed module=entry_service status=ok entry_id={} count={}",
                id,
                self.repo.count_entries()
            );
        } else {
            debug!("event=entry_remove_miss module=entry_service status=noop entry_id={id}");
        }
        removed
    }

    pub fn count(&self) -> usize {
        self.repo.count_entries()
    }

    /// Entries in display order (most recent first).
    pub fn list(&self) -> &[Entry] {
        self.repo.list_entries()
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.repo.get_entry(id)
    }
}
