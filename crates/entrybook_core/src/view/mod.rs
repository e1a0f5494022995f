//! Read-only view models consumed by FFI and CLI presentation layers.
//!
//! # Responsibility
//! - Project draft and entry list state into render-ready shapes.
//! - Own every user-facing label so presentation layers stay dumb.
//!
//! # Invariants
//! - Views are rebuilt from state on every render; they hold no state.

pub mod entries_view;
pub mod form_view;

use crate::model::draft::EntryDraft;
use crate::model::entry::Entry;
use entries_view::EntriesView;
use form_view::FormView;
use serde::Serialize;

pub const PAGE_TITLE: &str = "Data Management";
pub const PAGE_SUBTITLE: &str = "Add and manage your entries efficiently";

/// Whole page: form next to the results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub form: FormView,
    pub entries: EntriesView,
}

impl PageView {
    pub fn build(draft: &EntryDraft, entries: &[Entry]) -> Self {
        Self {
            title: PAGE_TITLE,
            subtitle: PAGE_SUBTITLE,
            form: FormView::from_draft(draft),
            entries: EntriesView::from_entries(entries),
        }
    }
}
