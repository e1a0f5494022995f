//! Entry form use-case service.
//!
//! # Responsibility
//! - Route field edits into the draft.
//! - Turn a complete draft into a committed entry on submit.
//!
//! # Invariants
//! - A rejected submit leaves both the draft and the entry list untouched.
//! - An accepted submit adds exactly one entry and then clears the draft.

use crate::model::draft::{EntryDraft, ValidationError};
use crate::model::entry::{Entry, EntryField};
use crate::repo::entry_repo::EntryRepository;
use crate::service::entry_service::EntryService;
use log::warn;

/// Form controller owning the current draft.
#[derive(Debug, Clone, Default)]
pub struct FormService {
    draft: EntryDraft,
}

impl FormService {
    /// Creates a controller with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates one draft field. Never fails.
    pub fn set_field(&mut self, field: EntryField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    pub fn field(&self, field: EntryField) -> &str {
        self.draft.field(field)
    }

    pub fn draft(&self) -> &EntryDraft {
        &self.draft
    }

    /// Clears every draft field.
    pub fn reset(&mut self) {
        self.draft.reset();
    }

    /// Validates the draft and commits it as a new entry.
    ///
    /// # Contract
    /// - On success the created entry is at the head of `entries` and the
    ///   draft is empty.
    /// - On failure nothing changes and the caller decides how to show the
    ///   error.
    ///
    /// # Errors
    /// - Returns `ValidationError` when any field is the empty string.
    pub fn submit<R: EntryRepository>(
        &mut self,
        entries: &mut EntryService<R>,
    ) -> Result<Entry, ValidationError> {
        let entry = match self.draft.to_entry() {
            Ok(entry) => entry,
            Err(err) => {
                warn!(
                    "event=entry_submit module=form_service status=rejected empty_fields={}",
                    err.field_list()
                );
                return Err(err);
            }
        };

        entries.add(entry.clone());
        self.reset();
        Ok(entry)
    }
}
