//! Tree storage and grid geometry
//!
//! Nodes are stored flat in per-type maps keyed by `NodeId`; structure is
//! carried by parent/children ID links. Grid geometry (column counts,
//! cell coordinates) always accounts for colspan.

use crate::{
    CellKind, Document, ModelError, Node, NodeId, NodeType, Paragraph, Result, Table, TableCell,
    TableRow, ThemeRegistry,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storage for the different node types
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeStorage {
    pub paragraphs: HashMap<NodeId, Paragraph>,
    pub tables: HashMap<NodeId, Table>,
    pub rows: HashMap<NodeId, TableRow>,
    pub cells: HashMap<NodeId, TableCell>,
}

/// The complete tree owned by one editing session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableTree {
    /// The root document
    pub document: Document,
    /// Storage for all nodes
    pub nodes: NodeStorage,
    /// Theme presets available to this document
    #[serde(default)]
    pub themes: ThemeRegistry,
}

impl TableTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            nodes: NodeStorage::default(),
            themes: ThemeRegistry::default(),
        }
    }

    /// Create a tree with a single empty paragraph
    pub fn with_empty_paragraph() -> Self {
        let mut tree = Self::new();
        tree.insert_paragraph(Paragraph::new(), None);
        tree
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Insert a paragraph as a top-level child, at `index` or at the end
    pub fn insert_paragraph(&mut self, paragraph: Paragraph, index: Option<usize>) -> NodeId {
        let id = paragraph.id();
        self.nodes.paragraphs.insert(id, paragraph);
        match index {
            Some(i) => self.document.insert_child(i, id),
            None => self.document.add_child(id),
        }
        id
    }

    /// Insert a table as a top-level child, at `index` or at the end
    pub fn insert_table(&mut self, table: Table, index: Option<usize>) -> NodeId {
        let id = table.id();
        self.nodes.tables.insert(id, table);
        match index {
            Some(i) => self.document.insert_child(i, id),
            None => self.document.add_child(id),
        }
        id
    }

    /// Insert a row into a table, at `index` or at the end
    pub fn insert_table_row(
        &mut self,
        mut row: TableRow,
        table_id: NodeId,
        index: Option<usize>,
    ) -> Result<NodeId> {
        let row_id = row.id();
        row.set_parent(Some(table_id));

        let table = self
            .nodes
            .tables
            .get_mut(&table_id)
            .ok_or(ModelError::NodeNotFound(table_id.as_uuid()))?;
        match index {
            Some(i) => table.insert_row(i, row_id),
            None => table.add_row(row_id),
        }
        self.nodes.rows.insert(row_id, row);
        Ok(row_id)
    }

    /// Insert a cell into a row, at `index` or at the end
    pub fn insert_table_cell(
        &mut self,
        mut cell: TableCell,
        row_id: NodeId,
        index: Option<usize>,
    ) -> Result<NodeId> {
        let cell_id = cell.id();
        cell.set_parent(Some(row_id));

        let row = self
            .nodes
            .rows
            .get_mut(&row_id)
            .ok_or(ModelError::NodeNotFound(row_id.as_uuid()))?;
        match index {
            Some(i) => row.insert_cell(i, cell_id),
            None => row.add_cell(cell_id),
        }
        self.nodes.cells.insert(cell_id, cell);
        Ok(cell_id)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn get_paragraph(&self, id: NodeId) -> Option<&Paragraph> {
        self.nodes.paragraphs.get(&id)
    }

    pub fn get_table(&self, id: NodeId) -> Option<&Table> {
        self.nodes.tables.get(&id)
    }

    pub fn get_table_mut(&mut self, id: NodeId) -> Option<&mut Table> {
        self.nodes.tables.get_mut(&id)
    }

    pub fn get_row(&self, id: NodeId) -> Option<&TableRow> {
        self.nodes.rows.get(&id)
    }

    pub fn get_cell(&self, id: NodeId) -> Option<&TableCell> {
        self.nodes.cells.get(&id)
    }

    pub fn get_cell_mut(&mut self, id: NodeId) -> Option<&mut TableCell> {
        self.nodes.cells.get_mut(&id)
    }

    /// Get the type of any known node
    pub fn node_type(&self, id: NodeId) -> Option<NodeType> {
        if self.nodes.paragraphs.contains_key(&id) {
            Some(NodeType::Paragraph)
        } else if self.nodes.tables.contains_key(&id) {
            Some(NodeType::Table)
        } else if self.nodes.rows.contains_key(&id) {
            Some(NodeType::TableRow)
        } else {
            self.nodes.cells.get(&id).map(|c| c.node_type())
        }
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove a table and all of its rows and cells
    pub fn remove_table(&mut self, table_id: NodeId) -> Result<()> {
        let table = self
            .nodes
            .tables
            .remove(&table_id)
            .ok_or(ModelError::NodeNotFound(table_id.as_uuid()))?;

        for &row_id in table.children() {
            if let Some(row) = self.nodes.rows.remove(&row_id) {
                for &cell_id in row.children() {
                    self.nodes.cells.remove(&cell_id);
                }
            }
        }
        self.document.remove_child(table_id);
        Ok(())
    }

    // =========================================================================
    // Ancestry
    // =========================================================================

    /// Resolve the cell containing a node, if any. Cheap: a paragraph (or
    /// unknown) node answers immediately without touching any table.
    pub fn containing_cell(&self, node_id: NodeId) -> Option<NodeId> {
        if self.nodes.cells.contains_key(&node_id) {
            Some(node_id)
        } else {
            None
        }
    }

    /// Resolve the table containing a node (a cell, row, or the table
    /// itself), if any
    pub fn containing_table(&self, node_id: NodeId) -> Option<NodeId> {
        if self.nodes.tables.contains_key(&node_id) {
            return Some(node_id);
        }
        let row_id = if let Some(cell) = self.nodes.cells.get(&node_id) {
            cell.parent()?
        } else {
            node_id
        };
        let row = self.nodes.rows.get(&row_id)?;
        row.parent()
    }

    // =========================================================================
    // Grid Geometry
    // =========================================================================

    /// Declared column count of a table: the span total of its first row
    pub fn column_count(&self, table_id: NodeId) -> usize {
        self.get_table(table_id)
            .and_then(|t| t.children().first().copied())
            .map(|row_id| self.row_span_total(row_id))
            .unwrap_or(0)
    }

    /// Total column span of a row (sum of effective colspans)
    pub fn row_span_total(&self, row_id: NodeId) -> usize {
        self.get_row(row_id)
            .map(|row| {
                row.children()
                    .iter()
                    .filter_map(|id| self.get_cell(*id))
                    .map(|c| c.attrs.effective_colspan() as usize)
                    .sum()
            })
            .unwrap_or(0)
    }

    /// Check the grid invariant: at least one row, and every row's span
    /// total equals the declared column count
    pub fn validate_grid(&self, table_id: NodeId) -> Result<()> {
        let table = self
            .get_table(table_id)
            .ok_or(ModelError::NodeNotFound(table_id.as_uuid()))?;
        if table.row_count() == 0 {
            return Err(ModelError::TreeStructureError(
                "table has no rows".to_string(),
            ));
        }

        let expected = self.column_count(table_id);
        for &row_id in table.children() {
            let total = self.row_span_total(row_id);
            if total != expected {
                return Err(ModelError::TreeStructureError(format!(
                    "row span total {} does not match column count {}",
                    total, expected
                )));
            }
        }
        Ok(())
    }

    /// Grid coordinates of a cell: (row index, starting grid column)
    pub fn cell_position(&self, cell_id: NodeId) -> Option<(usize, usize)> {
        let cell = self.get_cell(cell_id)?;
        let row_id = cell.parent()?;
        let row = self.get_row(row_id)?;
        let table_id = row.parent()?;
        let table = self.get_table(table_id)?;

        let row_index = table.children().iter().position(|&id| id == row_id)?;
        let mut col = 0usize;
        for &id in row.children() {
            if id == cell_id {
                return Some((row_index, col));
            }
            col += self.get_cell(id)?.attrs.effective_colspan() as usize;
        }
        None
    }

    /// The cell whose span covers grid column `col` in row `row_index`
    pub fn cell_at(&self, table_id: NodeId, row_index: usize, col: usize) -> Option<NodeId> {
        let table = self.get_table(table_id)?;
        let row_id = table.row_at(row_index)?;
        let row = self.get_row(row_id)?;

        let mut start = 0usize;
        for &id in row.children() {
            let span = self.get_cell(id)?.attrs.effective_colspan() as usize;
            if col < start + span {
                return Some(id);
            }
            start += span;
        }
        None
    }

    /// All cell IDs of a table in row-major order
    pub fn cells_in_order(&self, table_id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if let Some(table) = self.get_table(table_id) {
            for &row_id in table.children() {
                if let Some(row) = self.get_row(row_id) {
                    out.extend_from_slice(row.children());
                }
            }
        }
        out
    }

    /// Count of header rows at the top of the table (rows whose every
    /// cell is a header cell)
    pub fn header_row_count(&self, table_id: NodeId) -> usize {
        let Some(table) = self.get_table(table_id) else {
            return 0;
        };
        table
            .children()
            .iter()
            .take_while(|&&row_id| {
                self.get_row(row_id).is_some_and(|row| {
                    !row.children().is_empty()
                        && row
                            .children()
                            .iter()
                            .all(|id| self.get_cell(*id).is_some_and(TableCell::is_header))
                })
            })
            .count()
    }
}

impl Default for TableTree {
    fn default() -> Self {
        Self::with_empty_paragraph()
    }
}

// Convenience constructor used across tests and by InsertTable
impl TableTree {
    /// Build a rows x cols table of empty cells with default attributes.
    /// The first row becomes header cells when `header_row` is set.
    pub fn build_table(&mut self, rows: usize, cols: usize, header_row: bool) -> Result<NodeId> {
        let rows = rows.max(1);
        let cols = cols.max(1);

        let table_id = self.insert_table(Table::new(), None);
        for row_idx in 0..rows {
            let row_id = self.insert_table_row(TableRow::new(), table_id, None)?;
            let kind = if header_row && row_idx == 0 {
                CellKind::Header
            } else {
                CellKind::Body
            };
            for _ in 0..cols {
                self.insert_table_cell(TableCell::with_kind(kind), row_id, None)?;
            }
        }
        Ok(table_id)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellAttrs;

    #[test]
    fn test_build_table_shape() {
        let mut tree = TableTree::new();
        let table_id = tree.build_table(2, 3, true).unwrap();

        assert_eq!(tree.get_table(table_id).unwrap().row_count(), 2);
        assert_eq!(tree.column_count(table_id), 3);
        assert!(tree.validate_grid(table_id).is_ok());
        assert_eq!(tree.header_row_count(table_id), 1);
        assert_eq!(tree.cells_in_order(table_id).len(), 6);
    }

    #[test]
    fn test_cell_position_with_colspan() {
        let mut tree = TableTree::new();
        let table_id = tree.build_table(2, 3, false).unwrap();

        // Span the first cell of row 0 across two columns
        let cells = tree.cells_in_order(table_id);
        let first = cells[0];
        tree.get_cell_mut(first).unwrap().attrs = CellAttrs::new().with_spans(2, 1);
        // Drop the now-covered second cell to keep the grid consistent
        let second = cells[1];
        let row_id = tree.get_cell(second).unwrap().parent().unwrap();
        tree.nodes.rows.get_mut(&row_id).unwrap().remove_cell(second);
        tree.nodes.cells.remove(&second);

        assert!(tree.validate_grid(table_id).is_ok());
        assert_eq!(tree.cell_position(cells[2]), Some((0, 2)));
        assert_eq!(tree.cell_at(table_id, 0, 1), Some(first));
        assert_eq!(tree.cell_at(table_id, 0, 2), Some(cells[2]));
    }

    #[test]
    fn test_validate_grid_detects_mismatch() {
        let mut tree = TableTree::new();
        let table_id = tree.build_table(2, 2, false).unwrap();

        let cells = tree.cells_in_order(table_id);
        tree.get_cell_mut(cells[0]).unwrap().attrs = CellAttrs::new().with_spans(2, 1);

        assert!(tree.validate_grid(table_id).is_err());
    }

    #[test]
    fn test_containing_table_and_cell() {
        let mut tree = TableTree::with_empty_paragraph();
        let para_id = tree.document.children()[0];
        let table_id = tree.build_table(1, 1, false).unwrap();
        let cell_id = tree.cells_in_order(table_id)[0];

        assert_eq!(tree.containing_cell(cell_id), Some(cell_id));
        assert_eq!(tree.containing_cell(para_id), None);
        assert_eq!(tree.containing_table(cell_id), Some(table_id));
        assert_eq!(tree.containing_table(para_id), None);
        assert_eq!(tree.containing_table(table_id), Some(table_id));
    }

    #[test]
    fn test_tree_serde_round_trip() {
        let mut tree = TableTree::with_empty_paragraph();
        let table_id = tree.build_table(2, 2, true).unwrap();
        tree.cells_in_order(table_id)
            .into_iter()
            .for_each(|id| tree.get_cell_mut(id).unwrap().set_content("x"));

        let json = serde_json::to_string(&tree).unwrap();
        let restored: TableTree = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.document.children(), tree.document.children());
        assert_eq!(restored.column_count(table_id), 2);
        assert_eq!(restored.header_row_count(table_id), 1);
        assert!(restored.validate_grid(table_id).is_ok());
        let cell_id = restored.cells_in_order(table_id)[0];
        assert_eq!(restored.get_cell(cell_id).unwrap().content, "x");
    }

    #[test]
    fn test_remove_table_clears_storage() {
        let mut tree = TableTree::new();
        let table_id = tree.build_table(2, 2, false).unwrap();
        assert_eq!(tree.nodes.cells.len(), 4);

        tree.remove_table(table_id).unwrap();
        assert!(tree.nodes.tables.is_empty());
        assert!(tree.nodes.rows.is_empty());
        assert!(tree.nodes.cells.is_empty());
        assert!(tree.document.children().is_empty());
    }
}
