//! In-memory document tree.
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`]. A node is either an element with ordered children or a text
//! leaf; only text leaves carry characters.

mod parse;
mod visible;

pub use parse::parse_markup;

/// Handle to a node in a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Node payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Structural node; never carries text directly.
    Element { tag: String, children: Vec<NodeId> },
    /// Leaf text segment.
    Text(String),
}

/// Inline style of the body element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BodyStyle {
    /// CSS `font-family` value, if one has been applied.
    pub font_family: Option<String>,
}

/// A document: an arena of nodes plus a body style.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<NodeKind>,
    root: NodeId,
    body: Option<NodeId>,
    style: BodyStyle,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Tag name of the synthetic root element.
    pub const ROOT_TAG: &'static str = "#document";

    /// Create an empty document holding only the root element.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeKind::Element {
                tag: Self::ROOT_TAG.to_string(),
                children: Vec::new(),
            }],
            root: NodeId(0),
            body: None,
            style: BodyStyle::default(),
        }
    }

    /// Create a document whose body holds `text` as a single segment.
    ///
    /// The segment sits in a `pre` element so line breaks stay visible.
    /// Empty text produces a body with no children.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut doc = Self::new();
        let body = doc.append_element(doc.root, "body");
        if !text.is_empty() {
            let pre = doc.append_element(body, "pre");
            doc.append_text(pre, text);
        }
        doc
    }

    /// The synthetic root element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// The first `body` element, if the document has one.
    #[must_use]
    pub const fn body(&self) -> Option<NodeId> {
        self.body
    }

    /// The body element, falling back to the root.
    #[must_use]
    pub fn body_or_root(&self) -> NodeId {
        self.body.unwrap_or(self.root)
    }

    /// Body inline style.
    #[must_use]
    pub const fn style(&self) -> &BodyStyle {
        &self.style
    }

    /// Replace the body `font-family`.
    pub fn set_font_family(&mut self, family: &str) {
        self.style.font_family = Some(family.to_string());
    }

    /// Number of nodes, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the document holds only its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Node payload for `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0]
    }

    /// Children of an element; empty for text leaves.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.nodes[id.0] {
            NodeKind::Element { children, .. } => children.as_slice(),
            NodeKind::Text(_) => &[],
        }
    }

    /// Tag name of an element.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0] {
            NodeKind::Element { tag, .. } => Some(tag.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    /// Text of a leaf.
    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0] {
            NodeKind::Text(text) => Some(text.as_str()),
            NodeKind::Element { .. } => None,
        }
    }

    /// Overwrite the text of a leaf. Elements are left untouched.
    pub fn set_text(&mut self, id: NodeId, value: String) {
        if let NodeKind::Text(text) = &mut self.nodes[id.0] {
            *text = value;
        }
    }

    /// Append a new element under `parent`.
    ///
    /// The first element tagged `body` becomes the document body.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.push(
            parent,
            NodeKind::Element {
                tag: tag.to_string(),
                children: Vec::new(),
            },
        );
        if self.body.is_none() && tag == "body" {
            self.body = Some(id);
        }
        id
    }

    /// Append a text leaf under `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(parent, NodeKind::Text(text.to_string()))
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(kind);
        if let NodeKind::Element { children, .. } = &mut self.nodes[parent.0] {
            children.push(id);
        }
        id
    }

    /// Concatenated text of every leaf under `id`, in document order.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            match &self.nodes[id.0] {
                NodeKind::Text(text) => out.push_str(text),
                NodeKind::Element { children, .. } => stack.extend(children.iter().rev()),
            }
        }
        out
    }
}
