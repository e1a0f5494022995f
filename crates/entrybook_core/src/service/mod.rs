//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate draft and repository calls into use-case level APIs.
//! - Keep UI/FFI layers decoupled from list storage details.

pub mod entry_service;
pub mod form_service;
