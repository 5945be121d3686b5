//! Destination form fields populated from a chosen match

use std::collections::BTreeMap;

use icd_core::Match;

/// Ids of the fields a selection is copied into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIds {
    pub code: String,
    pub name: String,
    pub description: String,
    pub foundation_uri: String,
    pub chapter: String,
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            code: "id_icd_code".into(),
            name: "id_name".into(),
            description: "id_description".into(),
            foundation_uri: "id_foundation_uri".into(),
            chapter: "id_icd_chapter".into(),
        }
    }
}

/// A surface holding editable fields addressed by id
pub trait Form {
    fn set_value(&mut self, field_id: &str, value: &str);

    /// Current value of a field, `None` if it was never written
    fn value(&self, field_id: &str) -> Option<&str>;
}

/// Form kept in memory, keyed by field id
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    values: BTreeMap<String, String>,
}

impl Form for MemoryForm {
    fn set_value(&mut self, field_id: &str, value: &str) {
        self.values.insert(field_id.to_string(), value.to_string());
    }

    fn value(&self, field_id: &str) -> Option<&str> {
        self.values.get(field_id).map(String::as_str)
    }
}

/// Copy every field of `selected` into `form`.
///
/// Absent optional fields are written as empty strings so a previous
/// selection never leaks into the current one.
pub fn fill<F: Form + ?Sized>(form: &mut F, ids: &FieldIds, selected: &Match) {
    form.set_value(&ids.code, &selected.code);
    form.set_value(&ids.name, &selected.title);
    form.set_value(
        &ids.description,
        selected.description.as_deref().unwrap_or(""),
    );
    form.set_value(
        &ids.foundation_uri,
        selected.foundation_uri.as_deref().unwrap_or(""),
    );
    form.set_value(&ids.chapter, selected.chapter.as_deref().unwrap_or(""));
}
