/// A form field as it exists in a live document.
///
/// Attribute accessors return `None` for absent or empty attributes.
pub trait ILiveField {
    fn name(&self) -> Option<String>;
    fn placeholder(&self) -> Option<String>;
    fn aria_label(&self) -> Option<String>;
    fn id(&self) -> Option<String>;
    fn class_name(&self) -> Option<String>;

    /// The field's declared `type` attribute.
    fn declared_type(&self) -> Option<String>;

    /// Text of a label bound to this field through `for=<id>`.
    fn bound_label_text(&self) -> Option<String>;

    /// Text of the nearest enclosing label, with the field's own text removed.
    fn wrapping_label_text(&self) -> Option<String>;
}
