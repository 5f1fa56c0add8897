//! Selection projection - what table-scoped region is selected right now
//!
//! `project` is a pure function of the tree and the selection; the hosting
//! editor calls it from its own change notifications. When the selection
//! has no cell ancestor it answers immediately without walking any table.

use serde::{Deserialize, Serialize};
use table_model::{NodeId, ResolvedCellStyle, Selection, TableTree};

/// Classification of the current table-scoped selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionKind {
    /// No table is focused
    None,
    /// Caret or selection confined to a single cell
    Cell,
    /// Exactly one full row selected
    Row,
    /// Exactly one full column selected
    Column,
    /// The entire grid selected
    Table,
}

/// Derived, read-only view of the current table selection. The style
/// fields are always concrete; unset cell attributes resolve to schema
/// defaults so toolbar previews never see an undefined value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionProjection {
    pub kind: SelectionKind,
    /// The focused table, when any
    pub table_id: Option<NodeId>,
    /// The focused cell, when any
    pub cell_id: Option<NodeId>,
    /// Row index of the focused cell
    pub row_index: Option<usize>,
    /// Starting grid column of the focused cell
    pub column_index: Option<usize>,
    /// Resolved style of the focused cell
    pub cell_style: ResolvedCellStyle,
}

impl SelectionProjection {
    /// The no-table projection
    pub fn none() -> Self {
        Self {
            kind: SelectionKind::None,
            table_id: None,
            cell_id: None,
            row_index: None,
            column_index: None,
            cell_style: ResolvedCellStyle::default(),
        }
    }

    /// Check whether any table is focused
    pub fn in_table(&self) -> bool {
        self.kind != SelectionKind::None
    }
}

/// Grid footprint of one cell: rows and columns covered by its spans
#[derive(Debug, Clone, Copy)]
struct CellFootprint {
    first_row: usize,
    last_row: usize,
    first_col: usize,
    last_col: usize,
}

fn footprint(tree: &TableTree, cell_id: NodeId) -> Option<CellFootprint> {
    let (row, col) = tree.cell_position(cell_id)?;
    let attrs = &tree.get_cell(cell_id)?.attrs;
    Some(CellFootprint {
        first_row: row,
        last_row: row + attrs.effective_rowspan() as usize - 1,
        first_col: col,
        last_col: col + attrs.effective_colspan() as usize - 1,
    })
}

/// Compute the selection projection for the current document state
pub fn project(tree: &TableTree, selection: &Selection) -> SelectionProjection {
    let anchor_cell = tree.containing_cell(selection.anchor.node_id);
    let focus_cell = tree.containing_cell(selection.focus.node_id);

    // Fast path: neither end touches a table
    let Some(focused) = focus_cell.or(anchor_cell) else {
        return SelectionProjection::none();
    };
    let Some(table_id) = tree.containing_table(focused) else {
        return SelectionProjection::none();
    };

    let kind = classify(tree, table_id, anchor_cell, focus_cell, selection);
    let position = tree.cell_position(focused);

    SelectionProjection {
        kind,
        table_id: Some(table_id),
        cell_id: Some(focused),
        row_index: position.map(|(row, _)| row),
        column_index: position.map(|(_, col)| col),
        cell_style: tree
            .get_cell(focused)
            .map(|c| c.attrs.resolve())
            .unwrap_or_default(),
    }
}

fn classify(
    tree: &TableTree,
    table_id: NodeId,
    anchor_cell: Option<NodeId>,
    focus_cell: Option<NodeId>,
    selection: &Selection,
) -> SelectionKind {
    let (Some(anchor), Some(focus)) = (anchor_cell, focus_cell) else {
        // One end is outside the table, so the selection covers the whole
        // grid and more
        return SelectionKind::Table;
    };

    if tree.containing_table(anchor) != Some(table_id) {
        return SelectionKind::Table;
    }

    if selection.is_collapsed() || anchor == focus {
        return SelectionKind::Cell;
    }

    let (Some(a), Some(f)) = (footprint(tree, anchor), footprint(tree, focus)) else {
        return SelectionKind::Cell;
    };

    let first_row = a.first_row.min(f.first_row);
    let last_row = a.last_row.max(f.last_row);
    let first_col = a.first_col.min(f.first_col);
    let last_col = a.last_col.max(f.last_col);

    let row_count = tree.get_table(table_id).map(|t| t.row_count()).unwrap_or(0);
    let col_count = tree.column_count(table_id);
    let full_height = first_row == 0 && row_count > 0 && last_row == row_count - 1;
    let full_width = first_col == 0 && col_count > 0 && last_col == col_count - 1;

    if full_height && full_width {
        SelectionKind::Table
    } else if full_width && first_row == last_row {
        SelectionKind::Row
    } else if full_height && first_col == last_col {
        SelectionKind::Column
    } else {
        // A partial rectangle is not a structural unit; report the focused
        // cell
        SelectionKind::Cell
    }
}

// =============================================================================
// Tests
// =============================================================================
