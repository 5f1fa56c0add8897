//! Table node family - tables, rows, and cells
//!
//! A table contains only rows; a row contains only cells. Header and body
//! cells share one struct distinguished by `CellKind` since their
//! attribute set is identical; only their serialized tag differs.

use crate::{CellAttrs, Node, NodeId, NodeType, TableAttrs};
use serde::{Deserialize, Serialize};

// =============================================================================
// Table
// =============================================================================

/// A block-level table containing rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    id: NodeId,
    parent: Option<NodeId>,
    /// IDs of child rows, in order
    rows: Vec<NodeId>,
    /// Table attributes
    pub attrs: TableAttrs,
}

impl Table {
    /// Create a new empty table with default attributes
    pub fn new() -> Self {
        Self {
            id: NodeId::new(),
            parent: None,
            rows: Vec::new(),
            attrs: TableAttrs::default(),
        }
    }

    /// Create a table with attributes
    pub fn with_attrs(attrs: TableAttrs) -> Self {
        Self {
            id: NodeId::new(),
            parent: None,
            rows: Vec::new(),
            attrs,
        }
    }

    /// Add a row ID at the end
    pub fn add_row(&mut self, row_id: NodeId) {
        self.rows.push(row_id);
    }

    /// Insert a row at an index
    pub fn insert_row(&mut self, index: usize, row_id: NodeId) {
        if index <= self.rows.len() {
            self.rows.insert(index, row_id);
        }
    }

    /// Remove a row by ID
    pub fn remove_row(&mut self, row_id: NodeId) -> bool {
        if let Some(pos) = self.rows.iter().position(|&id| id == row_id) {
            self.rows.remove(pos);
            true
        } else {
            false
        }
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the row at an index
    pub fn row_at(&self, index: usize) -> Option<NodeId> {
        self.rows.get(index).copied()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for Table {
    fn id(&self) -> NodeId {
        self.id
    }

    fn node_type(&self) -> NodeType {
        NodeType::Table
    }

    fn children(&self) -> &[NodeId] {
        &self.rows
    }

    fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    fn can_have_children(&self) -> bool {
        true
    }
}

// =============================================================================
// Table Row
// =============================================================================

/// A row in a table, an ordered sequence of cells
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    id: NodeId,
    parent: Option<NodeId>,
    /// IDs of child cells, in order
    cells: Vec<NodeId>,
}

impl TableRow {
    /// Create a new empty row
    pub fn new() -> Self {
        Self {
            id: NodeId::new(),
            parent: None,
            cells: Vec::new(),
        }
    }

    /// Add a cell ID at the end
    pub fn add_cell(&mut self, cell_id: NodeId) {
        self.cells.push(cell_id);
    }

    /// Insert a cell at an index
    pub fn insert_cell(&mut self, index: usize, cell_id: NodeId) {
        if index <= self.cells.len() {
            self.cells.insert(index, cell_id);
        }
    }

    /// Remove a cell by ID
    pub fn remove_cell(&mut self, cell_id: NodeId) -> bool {
        if let Some(pos) = self.cells.iter().position(|&id| id == cell_id) {
            self.cells.remove(pos);
            true
        } else {
            false
        }
    }

    /// Get the number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

impl Default for TableRow {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for TableRow {
    fn id(&self) -> NodeId {
        self.id
    }

    fn node_type(&self) -> NodeType {
        NodeType::TableRow
    }

    fn children(&self) -> &[NodeId] {
        &self.cells
    }

    fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    fn can_have_children(&self) -> bool {
        true
    }
}

// =============================================================================
// Table Cell
// =============================================================================

/// Whether a cell is a header (`th`) or body (`td`) cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellKind {
    Header,
    #[default]
    Body,
}

/// A single cell. Content is an opaque text string owned by the cell; the
/// hosting editor edits it through the selection model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    id: NodeId,
    parent: Option<NodeId>,
    /// Header or body
    pub kind: CellKind,
    /// Cell attributes
    pub attrs: CellAttrs,
    /// Text content
    pub content: String,
}

impl TableCell {
    /// Create a new empty body cell
    pub fn new() -> Self {
        Self::with_kind(CellKind::Body)
    }

    /// Create a new empty cell of the given kind
    pub fn with_kind(kind: CellKind) -> Self {
        Self {
            id: NodeId::new(),
            parent: None,
            kind,
            attrs: CellAttrs::default(),
            content: String::new(),
        }
    }

    /// Create a cell with attributes
    pub fn with_attrs(kind: CellKind, attrs: CellAttrs) -> Self {
        Self {
            id: NodeId::new(),
            parent: None,
            kind,
            attrs,
            content: String::new(),
        }
    }

    /// Set the text content
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Check if this is a header cell
    pub fn is_header(&self) -> bool {
        self.kind == CellKind::Header
    }

    /// Content length in characters
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }
}

impl Default for TableCell {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for TableCell {
    fn id(&self) -> NodeId {
        self.id
    }

    fn node_type(&self) -> NodeType {
        match self.kind {
            CellKind::Header => NodeType::HeaderCell,
            CellKind::Body => NodeType::BodyCell,
        }
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
        Some(&self.content)
    }
}

// =============================================================================
// Tests
// =============================================================================
