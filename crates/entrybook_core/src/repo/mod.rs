//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate list storage details from service orchestration.
//!
//! # Invariants
//! - Repositories never validate drafts; services hand them finished entries.
//! - Nothing is persisted beyond the owning value's lifetime.

pub mod entry_repo;
