/// Read access to the parts of a document the language detector samples.
pub trait IDocumentSource {
    /// The document-level language tag, if any.
    fn declared_language(&self) -> Option<String>;

    /// Text of the document title.
    fn title(&self) -> Option<String>;

    /// Text content of every element with `tag`, in document order.
    fn texts_by_tag(&self, tag: &str) -> Vec<String>;
}
