use imeopt_core::traits::ILiveField;

use crate::document::Document;
use crate::node::NodeId;

/// A borrowed view of one input element, exposed to the predictor.
#[derive(Debug, Clone, Copy)]
pub struct FieldRef<'a> {
    document: &'a Document,
    node: NodeId,
}

impl<'a> FieldRef<'a> {
    pub fn new(document: &'a Document, node: NodeId) -> Self {
        Self { document, node }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.document
            .attr(self.node, name)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

impl ILiveField for FieldRef<'_> {
    fn name(&self) -> Option<String> {
        self.attr("name")
    }

    fn placeholder(&self) -> Option<String> {
        self.attr("placeholder")
    }

    fn aria_label(&self) -> Option<String> {
        self.attr("aria-label")
    }

    fn id(&self) -> Option<String> {
        self.attr("id")
    }

    fn class_name(&self) -> Option<String> {
        self.attr("class")
    }

    fn declared_type(&self) -> Option<String> {
        self.attr("type").map(|t| t.to_ascii_lowercase())
    }

    fn bound_label_text(&self) -> Option<String> {
        let id = self.document.attr(self.node, "id")?;
        let label = self.document.label_for(id)?;
        Some(self.document.text_content(label))
    }

    fn wrapping_label_text(&self) -> Option<String> {
        let label = self.document.closest(self.node, "label")?;
        Some(self.document.text_content_excluding(label, self.node))
    }
}
