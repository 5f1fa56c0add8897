//! Document root and the minimal paragraph node
//!
//! The surrounding editor owns real paragraph semantics; the subsystem
//! only needs enough of one for a selection to live outside any table.

use crate::{Node, NodeId, NodeType};
use serde::{Deserialize, Serialize};

/// The document root: an ordered list of top-level block nodes
/// (paragraphs and tables)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    children: Vec<NodeId>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the ordered top-level children
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Append a top-level child
    pub fn add_child(&mut self, child_id: NodeId) {
        self.children.push(child_id);
    }

    /// Insert a top-level child at an index
    pub fn insert_child(&mut self, index: usize, child_id: NodeId) {
        if index <= self.children.len() {
            self.children.insert(index, child_id);
        }
    }

    /// Remove a top-level child by ID
    pub fn remove_child(&mut self, child_id: NodeId) -> bool {
        if let Some(pos) = self.children.iter().position(|&id| id == child_id) {
            self.children.remove(pos);
            true
        } else {
            false
        }
    }
}

/// A plain text paragraph outside any table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    id: NodeId,
    parent: Option<NodeId>,
    /// Text content
    pub text: String,
}

impl Paragraph {
    /// Create a new empty paragraph
    pub fn new() -> Self {
        Self {
            id: NodeId::new(),
            parent: None,
            text: String::new(),
        }
    }

    /// Create a paragraph with text
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            parent: None,
            text: text.into(),
        }
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for Paragraph {
    fn id(&self) -> NodeId {
        self.id
    }

    fn node_type(&self) -> NodeType {
        NodeType::Paragraph
    }

    fn children(&self) -> &[NodeId] {
        &[]
    }

    fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    fn can_have_children(&self) -> bool {
        false
    }

    fn text_content(&self) -> Option<&str> {
        Some(&self.text)
    }
}
