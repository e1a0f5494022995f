//! Flutter bridge surface for Entrybook core.
//!
//! Generated bridge glue lives outside this crate's hand-written sources.

pub mod api;
