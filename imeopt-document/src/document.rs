use imeopt_core::traits::IDocumentSource;

use crate::field::FieldRef;
use crate::node::{Node, NodeId, NodeKind};

const ROOT_TAG: &str = "html";
const INPUT_TAG: &str = "input";
const LABEL_TAG: &str = "label";
const TEXT_INPUT_TYPE: &str = "text";

/// Arena-backed document tree.
///
/// Node ids are only meaningful for the document that minted them. Ids from
/// another document never panic; they resolve to nothing.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    lang: Option<String>,
    title: Option<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let root = Node::new(
            None,
            NodeKind::Element {
                tag: ROOT_TAG.to_string(),
                attributes: Vec::new(),
            },
        );
        Self {
            nodes: vec![root],
            lang: None,
            title: None,
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    // ── Building ──────────────────────────────────────────────────────────

    /// Append an element under `parent`. Tag names are lower-cased.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        self.push(
            parent,
            NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
                attributes: Vec::new(),
            },
        )
    }

    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.push(parent, NodeKind::Text(text.into()))
    }

    /// A parent that is missing or a text node leaves the new node detached.
    fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        let attached = match self.nodes.get_mut(parent.0) {
            Some(node) if matches!(node.kind, NodeKind::Element { .. }) => {
                node.children.push(id);
                Some(parent)
            }
            _ => {
                tracing::trace!(parent = parent.0, "append target cannot hold children");
                None
            }
        };
        self.nodes.push(Node::new(attached, kind));
        id
    }

    /// Set or replace an attribute. Returns false when `node` is not an element.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>) -> bool {
        let Some(NodeKind::Element { attributes, .. }) =
            self.nodes.get_mut(node.0).map(|n| &mut n.kind)
        else {
            return false;
        };
        let name = name.to_ascii_lowercase();
        let value = value.into();
        match attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => attributes.push((name, value)),
        }
        true
    }

    /// Unlink `node` from its parent. The subtree stays in the arena.
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get_mut(node.0).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(parent) = self.nodes.get_mut(parent.0) {
            parent.children.retain(|child| *child != node);
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.node(node).and_then(Node::tag)
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node).and_then(|n| n.attr(name))
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(Node::parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node).map(Node::children).unwrap_or(&[])
    }

    /// Descendants of `node` in document order, excluding `node` itself.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Attached elements with `tag`, in document order.
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|id| self.tag(*id).is_some_and(|t| t.eq_ignore_ascii_case(tag)))
            .collect()
    }

    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|node| self.attr(*node, "id") == Some(id))
    }

    /// Concatenated text of every text node under `node`.
    pub fn text_content(&self, node: NodeId) -> String {
        self.collect_text(node, None)
    }

    /// Like [`text_content`](Self::text_content) but skipping the subtree
    /// rooted at `excluded`.
    pub fn text_content_excluding(&self, node: NodeId, excluded: NodeId) -> String {
        self.collect_text(node, Some(excluded))
    }

    fn collect_text(&self, node: NodeId, excluded: Option<NodeId>) -> String {
        let mut text = String::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if Some(id) == excluded {
                continue;
            }
            let Some(current) = self.node(id) else {
                continue;
            };
            match &current.kind {
                NodeKind::Text(t) => text.push_str(t),
                NodeKind::Element { .. } => {
                    stack.extend(current.children.iter().rev().copied());
                }
            }
        }
        text
    }

    /// Nearest inclusive ancestor of `node` with `tag`.
    pub fn closest(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(id) = current {
            if self.tag(id).is_some_and(|t| t.eq_ignore_ascii_case(tag)) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }

    /// First label whose `for` attribute equals `id`.
    pub fn label_for(&self, id: &str) -> Option<NodeId> {
        self.elements_by_tag(LABEL_TAG)
            .into_iter()
            .find(|label| self.attr(*label, "for") == Some(id))
    }

    /// Effective input type: the `type` attribute lower-cased, `text` when absent.
    pub fn input_type(&self, node: NodeId) -> Option<String> {
        self.tag(node).filter(|t| *t == INPUT_TAG)?;
        Some(
            self.attr(node, "type")
                .map_or_else(|| TEXT_INPUT_TYPE.to_string(), str::to_ascii_lowercase),
        )
    }

    /// An `input` with `type=text` or with no type attribute at all.
    pub fn is_candidate_field(&self, node: NodeId) -> bool {
        if self.tag(node) != Some(INPUT_TAG) {
            return false;
        }
        match self.attr(node, "type") {
            None => true,
            Some(t) => t.eq_ignore_ascii_case(TEXT_INPUT_TYPE),
        }
    }

    /// Candidate fields across the whole document.
    pub fn candidate_fields(&self) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|id| self.is_candidate_field(*id))
            .collect()
    }

    /// Fields in a newly inserted subtree.
    ///
    /// An inserted `input` is taken whatever its type; its descendants must
    /// be candidate fields.
    pub fn candidate_fields_in(&self, scope: NodeId) -> Vec<NodeId> {
        let inserted_input = (self.tag(scope) == Some(INPUT_TAG)).then_some(scope);
        inserted_input
            .into_iter()
            .chain(
                self.descendants(scope)
                    .into_iter()
                    .filter(|id| self.is_candidate_field(*id)),
            )
            .collect()
    }

    pub fn field(&self, node: NodeId) -> FieldRef<'_> {
        FieldRef::new(self, node)
    }
}

impl IDocumentSource for Document {
    fn declared_language(&self) -> Option<String> {
        self.lang.clone()
    }

    fn title(&self) -> Option<String> {
        self.title.clone()
    }

    fn texts_by_tag(&self, tag: &str) -> Vec<String> {
        self.elements_by_tag(tag)
            .into_iter()
            .map(|id| self.text_content(id))
            .collect()
    }
}
