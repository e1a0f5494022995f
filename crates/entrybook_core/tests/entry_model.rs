use entrybook_core::{Entry, EntryDraft, EntryField, PageView};
use uuid::Uuid;

#[test]
fn entry_new_generates_unique_ids() {
    let first = Entry::new("Ann", "a@x.com", "555-0001", "Eng");
    let second = Entry::new("Ann", "a@x.com", "555-0001", "Eng");

    assert!(!first.id.is_nil());
    assert_ne!(first.id, second.id);
}

#[test]
fn entry_serialization_uses_expected_wire_fields() {
    let entry_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let entry = Entry::with_id(entry_id, "Ann", "a@x.com", "555-0001", "Eng");

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["id"], entry_id.to_string());
    assert_eq!(json["name"], "Ann");
    assert_eq!(json["email"], "a@x.com");
    assert_eq!(json["phone"], "555-0001");
    assert_eq!(json["department"], "Eng");

    let decoded: Entry = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn entry_field_serializes_as_snake_case_id() {
    let json = serde_json::to_value(EntryField::Department).unwrap();
    assert_eq!(json, "department");
}

#[test]
fn page_view_serializes_render_labels() {
    let mut draft = EntryDraft::new();
    draft.set_field(EntryField::Email, "a@x.com");
    let page = PageView::build(&draft, &[]);

    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["title"], "Data Management");
    assert_eq!(json["form"]["submit_label"], "Add Entry");
    assert_eq!(json["form"]["fields"][1]["input_type"], "email");
    assert_eq!(json["form"]["fields"][1]["value"], "a@x.com");
    assert_eq!(json["form"]["fields"][2]["input_type"], "tel");
    assert_eq!(json["entries"]["title"], "Entries (0)");
    assert_eq!(
        json["entries"]["empty_message"],
        "No entries yet. Add one to get started!"
    );
}
