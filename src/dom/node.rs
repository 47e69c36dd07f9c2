//! Node storage for the in-memory document arena.
//!
//! Two node kinds exist, mirroring what the substitution engine can
//! touch: elements (tag + attributes + children) and text leaves.
//! Input-specific state (editable value, selection range) lives directly
//! on the node record so the composition corrector can read and restore
//! it without a side table.

use std::collections::HashMap;

use crate::types::NodeId;

// =============================================================================
// Node Kind
// =============================================================================

/// Payload of a document node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Element with a tag name and attribute map.
    Element(ElementData),
    /// Text leaf holding its character data.
    Text(String),
}

/// Element payload: tag name plus attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementData {
    pub tag: String,
    pub attrs: HashMap<String, String>,
}

impl ElementData {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: HashMap::new(),
        }
    }

    /// Whitespace-separated class list from the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attrs
            .get("class")
            .map(String::as_str)
            .unwrap_or("")
            .split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }
}

// =============================================================================
// Node Record
// =============================================================================

/// One arena slot.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Editable value for input-like elements.
    pub value: String,
    /// Selection range (start, end) in character offsets into `value`.
    pub selection: (usize, usize),
}

impl NodeData {
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Element(ElementData::new(tag)),
            parent: None,
            children: Vec::new(),
            value: String::new(),
            selection: (0, 0),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text(content.into()),
            parent: None,
            children: Vec::new(),
            value: String::new(),
            selection: (0, 0),
        }
    }

    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.kind {
            NodeKind::Element(el) => Some(el),
            NodeKind::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.kind {
            NodeKind::Element(el) => Some(el),
            NodeKind::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(t) => Some(t),
            NodeKind::Element(_) => None,
        }
    }
}
