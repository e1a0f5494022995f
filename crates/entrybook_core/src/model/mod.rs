//! Domain model for entries and the entry form.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep form draft state separate from committed entries.
//!
//! # Invariants
//! - Every committed entry is identified by a stable `EntryId`.
//! - Drafts are never stored in the entry list.

pub mod draft;
pub mod entry;
