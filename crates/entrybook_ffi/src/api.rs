//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the single process-wide entry session behind the UI.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every failure is reported through a response envelope or string.
//! - Validation failures never mutate the session.

use entrybook_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    EntryField, EntrySession, PageView,
};
use log::warn;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

const NO_MATCH_MESSAGE: &str = "No matching entry.";

static SESSION: Lazy<Mutex<EntrySession>> = Lazy::new(|| Mutex::new(EntrySession::new()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for form and table commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryActionResponse {
    /// Whether the command was accepted.
    pub ok: bool,
    /// Entry the command created or targeted, when there is one.
    pub entry_id: Option<String>,
    /// Human-readable message for inline UI feedback.
    pub message: String,
}

impl EntryActionResponse {
    fn success(message: impl Into<String>, entry_id: Option<String>) -> Self {
        Self {
            ok: true,
            entry_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            entry_id: None,
            message: message.into(),
        }
    }
}

/// Updates one form field from a keystroke.
///
/// # FFI contract
/// - `field` is one of `name|email|phone|department`.
/// - Values are stored verbatim; no trimming or format checks.
/// - Unknown field names are the only failure.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_set_field(field: String, value: String) -> EntryActionResponse {
    let field = match field.parse::<EntryField>() {
        Ok(field) => field,
        Err(err) => return EntryActionResponse::failure(err.to_string()),
    };
    with_session(|session| session.set_field(field, value));
    EntryActionResponse::success("Field updated.", None)
}

/// Submits the current form.
///
/// # FFI contract
/// - On success returns the created entry ID; the form is cleared.
/// - On failure returns `ok=false` with `Please fill in all fields` and
///   leaves the form as typed.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_submit() -> EntryActionResponse {
    match with_session(EntrySession::submit) {
        Ok(entry) => EntryActionResponse::success("Entry added.", Some(entry.id.to_string())),
        Err(err) => EntryActionResponse::failure(err.to_string()),
    }
}

/// Deletes one table row by entry ID.
///
/// # FFI contract
/// - Unknown or malformed IDs are a no-op and still return `ok=true`.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_delete(entry_id: String) -> EntryActionResponse {
    let Ok(id) = Uuid::parse_str(entry_id.trim()) else {
        return EntryActionResponse::success(NO_MATCH_MESSAGE, None);
    };
    if with_session(|session| session.remove(id)) {
        EntryActionResponse::success("Entry deleted.", Some(id.to_string()))
    } else {
        EntryActionResponse::success(NO_MATCH_MESSAGE, None)
    }
}

/// Clears every form field.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_reset_form() {
    with_session(EntrySession::reset_form);
}

/// Returns the full render model for the page.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_page() -> PageView {
    with_session(|session| session.page())
}

fn with_session<T>(f: impl FnOnce(&mut EntrySession) -> T) -> T {
    let mut guard = lock_session();
    f(&mut *guard)
}

fn lock_session() -> MutexGuard<'static, EntrySession> {
    SESSION.lock().unwrap_or_else(|poisoned| {
        warn!("event=session_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}
