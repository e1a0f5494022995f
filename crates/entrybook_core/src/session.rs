//! Single-session application state.
//!
//! # Responsibility
//! - Group the form controller and the entry list as two independently
//!   owned values.
//! - Route presentation events to the owning controller.
//!
//! # Invariants
//! - All transitions run to completion synchronously through `&mut self`.

use crate::model::draft::ValidationError;
use crate::model::entry::{Entry, EntryField, EntryId};
use crate::repo::entry_repo::InMemoryEntryRepository;
use crate::service::entry_service::EntryService;
use crate::service::form_service::FormService;
use crate::view::PageView;

/// Process-lifetime state for one record manager page.
#[derive(Debug, Clone, Default)]
pub struct EntrySession {
    pub form: FormService,
    pub entries: EntryService<InMemoryEntryRepository>,
}

impl EntrySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: EntryField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Submits the form into this session's entry list.
    pub fn submit(&mut self) -> Result<Entry, ValidationError> {
        self.form.submit(&mut self.entries)
    }

    /// Deletes one row. Unknown ids are ignored.
    pub fn remove(&mut self, id: EntryId) -> bool {
        self.entries.remove(id)
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    pub fn count(&self) -> usize {
        self.entries.count()
    }

    /// Builds the current render model from both holders.
    pub fn page(&self) -> PageView {
        PageView::build(self.form.draft(), self.entries.list())
    }
}
