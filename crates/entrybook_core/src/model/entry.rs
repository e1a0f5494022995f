//! Entry domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered as one table row.
//! - Define the closed set of editable entry fields.
//!
//! # Invariants
//! - `id` is generated once and never changes for the entry lifetime.
//! - `id` is never reused for another entry within a session.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for one entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = Uuid;

/// Field string id for `EntryField::Name`.
pub const ENTRY_FIELD_NAME: &str = "name";
/// Field string id for `EntryField::Email`.
pub const ENTRY_FIELD_EMAIL: &str = "email";
/// Field string id for `EntryField::Phone`.
pub const ENTRY_FIELD_PHONE: &str = "phone";
/// Field string id for `EntryField::Department`.
pub const ENTRY_FIELD_DEPARTMENT: &str = "department";

/// One of the four user-editable entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryField {
    Name,
    Email,
    Phone,
    Department,
}

impl EntryField {
    /// All fields in form display order.
    pub const ALL: [EntryField; 4] = [Self::Name, Self::Email, Self::Phone, Self::Department];

    /// Stable string id used by string-keyed callers (FFI, CLI).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => ENTRY_FIELD_NAME,
            Self::Email => ENTRY_FIELD_EMAIL,
            Self::Phone => ENTRY_FIELD_PHONE,
            Self::Department => ENTRY_FIELD_DEPARTMENT,
        }
    }

    /// User-facing column and input label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Department => "Department",
        }
    }
}

impl Display for EntryField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known entry field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEntryFieldError {
    pub value: String,
}

impl Display for ParseEntryFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown entry field `{}`; expected name|email|phone|department",
            self.value
        )
    }
}

impl Error for ParseEntryFieldError {}

impl FromStr for EntryField {
    type Err = ParseEntryFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            ENTRY_FIELD_NAME => Ok(Self::Name),
            ENTRY_FIELD_EMAIL => Ok(Self::Email),
            ENTRY_FIELD_PHONE => Ok(Self::Phone),
            ENTRY_FIELD_DEPARTMENT => Ok(Self::Department),
            _ => Err(ParseEntryFieldError {
                value: value.to_string(),
            }),
        }
    }
}

/// Canonical record for one managed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque identifier used for row keys and deletion.
    pub id: EntryId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
}

impl Entry {
    /// Creates a new entry with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, email, phone, department)
    }

    /// Creates a new entry with a caller-provided ID.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(
        id: EntryId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            department: department.into(),
        }
    }

    /// Returns the value of one field.
    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Name => &self.name,
            EntryField::Email => &self.email,
            EntryField::Phone => &self.phone,
            EntryField::Department => &self.department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Entry, EntryField};

    #[test]
    fn field_parse_accepts_known_ids_case_insensitively() {
        assert_eq!(" Email ".parse::<EntryField>().unwrap(), EntryField::Email);
        assert_eq!("DEPARTMENT".parse::<EntryField>().unwrap(), EntryField::Department);
    }

    #[test]
    fn field_parse_rejects_unknown_id() {
        let err = "address".parse::<EntryField>().unwrap_err();
        assert_eq!(err.value, "address");
        assert!(err.to_string().contains("unknown entry field"));
    }

    #[test]
    fn field_accessor_matches_struct_fields() {
        let entry = Entry::new("Ann", "a@x.com", "555-0001", "Eng");
        let values: Vec<&str> = EntryField::ALL.iter().map(|f| entry.field(*f)).collect();
        assert_eq!(values, ["Ann", "a@x.com", "555-0001", "Eng"]);
    }
}
