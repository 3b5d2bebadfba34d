//! Build a [`FieldDescriptor`] from a live field.
//!
//! Label lookup order: a label bound through `for=<id>` first, then a label
//! wrapping the field. The wrapping label's text never includes the field's
//! own text, so a field's current value cannot leak into its label.

use imeopt_core::models::FieldDescriptor;
use imeopt_core::traits::ILiveField;

pub fn extract_descriptor(field: &dyn ILiveField) -> FieldDescriptor {
    FieldDescriptor {
        name: present(field.name()),
        placeholder: present(field.placeholder()),
        aria_label: present(field.aria_label()),
        label: resolve_label(field),
        id: present(field.id()),
        class_name: present(field.class_name()),
        declared_type: present(field.declared_type()),
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn resolve_label(field: &dyn ILiveField) -> Option<String> {
    if present(field.id()).is_some() {
        if let Some(text) = present(field.bound_label_text()) {
            return Some(text);
        }
    }
    present(field.wrapping_label_text().map(|t| t.trim().to_string()))
}
