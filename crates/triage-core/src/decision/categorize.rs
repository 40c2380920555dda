use serde::{Deserialize, Serialize};

/// An editable-or-not attribute shown alongside a categorize decision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub editable: bool,
}

/// Attribute bag for a `categorize` decision — classify an item into a
/// category and optionally a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorizeData {
    pub preview: String,
    /// Allowed categories; a categorize decision with none is malformed.
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_project: Option<String>,
    #[serde(default)]
    pub show_type_selector: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_fields: Vec<FieldDescriptor>,
}

impl CategorizeData {
    /// True when `name` refers to a field the user may edit.
    pub fn is_editable_field(&self, name: &str) -> bool {
        self.additional_fields
            .iter()
            .any(|f| f.name == name && f.editable)
    }
}
