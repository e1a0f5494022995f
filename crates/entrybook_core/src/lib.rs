//! Core domain logic for Entrybook.
//! This crate is the single source of truth for form and entry list invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::draft::{EntryDraft, ValidationError, VALIDATION_MESSAGE};
pub use model::entry::{Entry, EntryField, EntryId, ParseEntryFieldError};
pub use repo::entry_repo::{EntryRepository, InMemoryEntryRepository};
pub use service::entry_service::EntryService;
pub use service::form_service::FormService;
pub use session::EntrySession;
pub use view::entries_view::{EntriesView, EntryRowView};
pub use view::form_view::{FormFieldView, FormView, InputType};
pub use view::PageView;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
