//! Entry table projection for presentation layers.
//!
//! # Invariants
//! - `rows` keeps list order (most recent first).
//! - `empty_message` is set exactly when there are no rows.

use crate::model::entry::{Entry, EntryField};
use serde::Serialize;

pub const EMPTY_MESSAGE: &str = "No entries yet. Add one to get started!";
pub const ACTION_COLUMN: &str = "Action";

/// One table row with its delete target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRowView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    /// Alternating shade for odd rows.
    pub striped: bool,
}

/// Results section: header label plus table or empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntriesView {
    pub title: String,
    pub count: usize,
    pub columns: Vec<&'static str>,
    pub rows: Vec<EntryRowView>,
    pub empty_message: Option<&'static str>,
}

impl EntriesView {
    pub fn from_entries(entries: &[Entry]) -> Self {
        let rows: Vec<EntryRowView> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryRowView {
                id: entry.id.to_string(),
                name: entry.name.clone(),
                email: entry.email.clone(),
                phone: entry.phone.clone(),
                department: entry.department.clone(),
                striped: index % 2 == 1,
            })
            .collect();
        let columns = EntryField::ALL
            .into_iter()
            .map(EntryField::label)
            .chain(std::iter::once(ACTION_COLUMN))
            .collect();

        Self {
            title: format!("Entries ({})", rows.len()),
            count: rows.len(),
            columns,
            empty_message: rows.is_empty().then_some(EMPTY_MESSAGE),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EntriesView, EMPTY_MESSAGE};
    use crate::model::entry::Entry;

    #[test]
    fn empty_list_renders_empty_state() {
        let view = EntriesView::from_entries(&[]);
        assert_eq!(view.title, "Entries (0)");
        assert_eq!(view.empty_message, Some(EMPTY_MESSAGE));
        assert!(view.rows.is_empty());
    }

    #[test]
    fn rows_alternate_stripes_and_keep_order() {
        let entries = vec![
            Entry::new("c", "c", "c", "c"),
            Entry::new("b", "b", "b", "b"),
            Entry::new("a", "a", "a", "a"),
        ];
        let view = EntriesView::from_entries(&entries);

        assert_eq!(view.title, "Entries (3)");
        assert_eq!(view.empty_message, None);
        assert_eq!(
            view.columns,
            ["Name", "Email", "Phone", "Department", "Action"]
        );
        let stripes: Vec<bool> = view.rows.iter().map(|row| row.striped).collect();
        assert_eq!(stripes, [false, true, false]);
        assert_eq!(view.rows[0].id, entries[0].id.to_string());
        assert_eq!(view.rows[2].name, "a");
    }
}
