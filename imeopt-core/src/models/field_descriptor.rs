use serde::{Deserialize, Serialize};

/// Descriptive text collected about a form field.
///
/// Every field is optional and an empty descriptor is valid input. Builders
/// treat empty strings as absent so callers can pass raw attribute values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldDescriptor {
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub aria_label: Option<String>,
    pub label: Option<String>,
    pub id: Option<String>,
    pub class_name: Option<String>,
    /// The field's already-declared type, verbatim (e.g. `"tel"`, `"checkbox"`).
    #[serde(rename = "type")]
    pub declared_type: Option<String>,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    (!value.is_empty()).then_some(value)
}

impl FieldDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_empty(name);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = non_empty(placeholder);
        self
    }

    pub fn with_aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = non_empty(aria_label);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = non_empty(label);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = non_empty(id);
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = non_empty(class_name);
        self
    }

    pub fn with_declared_type(mut self, declared_type: impl Into<String>) -> Self {
        self.declared_type = non_empty(declared_type);
        self
    }

    /// Present text parts in weight order: aria-label, label, name, placeholder, id, class.
    ///
    /// The declared type is not text evidence and is never included.
    pub fn text_parts(&self) -> impl Iterator<Item = &str> {
        [
            &self.aria_label,
            &self.label,
            &self.name,
            &self.placeholder,
            &self.id,
            &self.class_name,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.is_empty())
    }

    /// All present text parts joined by single spaces and lower-cased.
    pub fn search_text(&self) -> String {
        self.text_parts().collect::<Vec<_>>().join(" ").to_lowercase()
    }

    /// True when no descriptive text and no declared type is present.
    pub fn is_empty(&self) -> bool {
        self.text_parts().next().is_none()
            && self.declared_type.as_deref().map_or(true, str::is_empty)
    }
}
