//! Form projection for presentation layers.

use crate::model::draft::EntryDraft;
use crate::model::entry::EntryField;
use serde::Serialize;

pub const FORM_HEADING: &str = "Add New Entry";
pub const SUBMIT_LABEL: &str = "Add Entry";

/// Input control hint for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Text,
    Email,
    Tel,
}

impl InputType {
    pub fn for_field(field: EntryField) -> Self {
        match field {
            EntryField::Email => Self::Email,
            EntryField::Phone => Self::Tel,
            EntryField::Name | EntryField::Department => Self::Text,
        }
    }
}

/// One labeled input bound to a draft field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFieldView {
    pub field: EntryField,
    pub label: &'static str,
    pub input_type: InputType,
    pub placeholder: String,
    pub value: String,
}

/// Controlled form state as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub heading: &'static str,
    pub fields: Vec<FormFieldView>,
    pub submit_label: &'static str,
}

impl FormView {
    pub fn from_draft(draft: &EntryDraft) -> Self {
        let fields = EntryField::ALL
            .into_iter()
            .map(|field| FormFieldView {
                field,
                label: field.label(),
                input_type: InputType::for_field(field),
                placeholder: format!("Enter {}", field.as_str()),
                value: draft.field(field).to_string(),
            })
            .collect();
        Self {
            heading: FORM_HEADING,
            fields,
            submit_label: SUBMIT_LABEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormView, InputType};
    use crate::model::draft::EntryDraft;
    use crate::model::entry::EntryField;

    #[test]
    fn form_view_binds_draft_values_and_input_types() {
        let mut draft = EntryDraft::new();
        draft.set_field(EntryField::Phone, "555");
        let view = FormView::from_draft(&draft);

        let types: Vec<InputType> = view.fields.iter().map(|f| f.input_type).collect();
        assert_eq!(
            types,
            [InputType::Text, InputType::Email, InputType::Tel, InputType::Text]
        );
        assert_eq!(view.fields[2].value, "555");
        assert_eq!(view.fields[3].placeholder, "Enter department");
        assert_eq!(view.submit_label, "Add Entry");
    }
}
