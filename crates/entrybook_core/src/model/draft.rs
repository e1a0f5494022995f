//! Form draft model.
//!
//! # Responsibility
//! - Hold the four in-progress form values between keystrokes.
//! - Decide whether the current values may become an `Entry`.
//!
//! # Invariants
//! - `set_field` touches exactly one field and never fails.
//! - Validation only checks for the empty string; values are not trimmed,
//!   so whitespace-only input is accepted.
//! - A failed validation never mutates the draft.

use crate::model::entry::{Entry, EntryField};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User-facing message shown when a submit is rejected.
pub const VALIDATION_MESSAGE: &str = "Please fill in all fields";

/// Submit rejected because at least one field is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Empty fields in form order. Never empty.
    pub empty_fields: Vec<EntryField>,
}

impl ValidationError {
    /// Comma-joined field ids, used for diagnostics.
    pub fn field_list(&self) -> String {
        self.empty_fields
            .iter()
            .map(|field| field.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(VALIDATION_MESSAGE)
    }
}

impl Error for ValidationError {}

/// In-progress form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
}

impl EntryDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces one field value. No format checks are applied.
    pub fn set_field(&mut self, field: EntryField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Returns the current value of one field.
    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Name => &self.name,
            EntryField::Email => &self.email,
            EntryField::Phone => &self.phone,
            EntryField::Department => &self.department,
        }
    }

    /// Clears all four fields.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns whether every field is the empty string.
    pub fn is_empty(&self) -> bool {
        EntryField::ALL.iter().all(|field| self.field(*field).is_empty())
    }

    /// Checks that every field is non-empty.
    ///
    /// # Errors
    /// - Returns `ValidationError` listing each empty field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let empty_fields: Vec<EntryField> = EntryField::ALL
            .into_iter()
            .filter(|field| self.field(*field).is_empty())
            .collect();
        if empty_fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { empty_fields })
        }
    }

    /// Builds a new entry with a fresh ID from the current values.
    ///
    /// Does not reset the draft; callers decide when to clear it.
    pub fn to_entry(&self) -> Result<Entry, ValidationError> {
        self.validate()?;
        Ok(Entry::new(
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.department.as_str(),
        ))
    }

    fn slot_mut(&mut self, field: EntryField) -> &mut String {
        match field {
            EntryField::Name => &mut self.name,
            EntryField::Email => &mut self.email,
            EntryField::Phone => &mut self.phone,
            EntryField::Department => &mut self.department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EntryDraft, VALIDATION_MESSAGE};
    use crate::model::entry::EntryField;

    fn filled() -> EntryDraft {
        let mut draft = EntryDraft::new();
        draft.set_field(EntryField::Name, "Ann");
        draft.set_field(EntryField::Email, "a@x.com");
        draft.set_field(EntryField::Phone, "555-0001");
        draft.set_field(EntryField::Department, "Eng");
        draft
    }

    #[test]
    fn set_field_touches_only_target_field() {
        let mut draft = filled();
        draft.set_field(EntryField::Phone, "not a phone");

        assert_eq!(draft.name, "Ann");
        assert_eq!(draft.email, "a@x.com");
        assert_eq!(draft.phone, "not a phone");
        assert_eq!(draft.department, "Eng");
    }

    #[test]
    fn validate_lists_every_empty_field_in_form_order() {
        let mut draft = EntryDraft::new();
        draft.set_field(EntryField::Email, "a@x.com");

        let err = draft.validate().unwrap_err();
        assert_eq!(
            err.empty_fields,
            vec![EntryField::Name, EntryField::Phone, EntryField::Department]
        );
        assert_eq!(err.field_list(), "name,phone,department");
        assert_eq!(err.to_string(), VALIDATION_MESSAGE);
    }

    #[test]
    fn whitespace_only_values_pass_validation() {
        let mut draft = EntryDraft::new();
        for field in EntryField::ALL {
            draft.set_field(field, "  ");
        }
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn reset_clears_all_fields() {
        let mut draft = filled();
        draft.reset();
        assert!(draft.is_empty());
        assert_eq!(draft, EntryDraft::default());
    }

    #[test]
    fn to_entry_copies_values_and_keeps_draft() {
        let draft = filled();
        let entry = draft.to_entry().unwrap();

        assert_eq!(entry.name, "Ann");
        assert_eq!(entry.department, "Eng");
        assert!(!entry.id.is_nil());
        assert_eq!(draft, filled());
    }
}
