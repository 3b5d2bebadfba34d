//! Stable selectors used as field-override keys.

use imeopt_core::traits::ILiveField;

const BARE_SELECTOR: &str = "input";

/// `input#<id>`, else `input[name="<name>"]`, else `input.<first class>`, else `input`.
pub fn generate_selector(field: &dyn ILiveField) -> String {
    if let Some(id) = field.id().filter(|v| !v.is_empty()) {
        return format!("input#{id}");
    }
    if let Some(name) = field.name().filter(|v| !v.is_empty()) {
        return format!("input[name=\"{name}\"]");
    }
    if let Some(class) = field
        .class_name()
        .as_deref()
        .and_then(|classes| classes.split_whitespace().next())
    {
        return format!("input.{class}");
    }
    BARE_SELECTOR.to_string()
}
