//! Table editing commands
//!
//! - InsertTable: create a new defaulted grid
//! - SetCellBackground / UnsetCellBackground
//! - SetCellTextColor / SetCellBorderColor
//! - SetCellTextWeight / SetCellVerticalAlign / SetCellBorderEdges
//! - ClearCellFormatting
//! - SetTableAlignment / ApplyTableTheme
//!
//! Attribute commands touch only the targeted node's attributes; none of
//! them restructures the grid.

use crate::{focused_cell, focused_table, CommandOutcome, Result, TableCommand};
use serde::{Deserialize, Serialize};
use table_model::{
    BorderEdges, Position, Selection, TableAlignment, TableTree, TextWeight, VerticalAlign,
};

// =============================================================================
// InsertTable
// =============================================================================

/// Insert a new table at the end of the document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertTable {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Whether the first row is a header row
    pub header_row: bool,
}

impl InsertTable {
    /// Create a new InsertTable command; dimensions are clamped to >= 1
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
            header_row: true,
        }
    }

    /// Set whether the first row is a header row
    pub fn with_header_row(mut self, header_row: bool) -> Self {
        self.header_row = header_row;
        self
    }
}

impl TableCommand for InsertTable {
    fn apply(&self, tree: &TableTree, selection: &Selection) -> Result<CommandOutcome> {
        let mut new_tree = tree.clone();
        let table_id = new_tree.build_table(self.rows, self.cols, self.header_row)?;

        // Caret moves into the first cell
        let new_selection = new_tree
            .cells_in_order(table_id)
            .first()
            .map(|&cell_id| Selection::collapsed(Position::start_of(cell_id)))
            .unwrap_or(*selection);

        Ok(CommandOutcome::applied(new_tree, new_selection))
    }

    fn display_name(&self) -> &str {
        "Insert Table"
    }
}

// =============================================================================
// Cell Attribute Commands
// =============================================================================

/// Set the background color of the focused cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCellBackground {
    pub color: String,
}

impl SetCellBackground {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

impl TableCommand for SetCellBackground {
    fn apply(&self, tree: &TableTree, selection: &Selection) -> Result<CommandOutcome> {
        let Some(cell_id) = focused_cell(tree, selection) else {
            return Ok(CommandOutcome::NotApplicable);
        };
        let mut new_tree = tree.clone();
        if let Some(cell) = new_tree.get_cell_mut(cell_id) {
            cell.attrs.background_color = Some(self.color.clone());
        }
        Ok(CommandOutcome::applied(new_tree, *selection))
    }

    fn display_name(&self) -> &str {
        "Set Cell Background"
    }
}

/// Remove the explicit background color of the focused cell, letting the
/// table theme show through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnsetCellBackground;

impl TableCommand for UnsetCellBackground {
    fn apply(&self, tree: &TableTree, selection: &Selection) -> Result<CommandOutcome> {
        let Some(cell_id) = focused_cell(tree, selection) else {
            return Ok(CommandOutcome::NotApplicable);
        };
        let mut new_tree = tree.clone();
        if let Some(cell) = new_tree.get_cell_mut(cell_id) {
            cell.attrs.background_color = None;
        }
        Ok(CommandOutcome::applied(new_tree, *selection))
    }

    fn display_name(&self) -> &str {
        "Unset Cell Background"
    }
}

/// Set the text color of the focused cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCellTextColor {
    pub color: String,
}

impl TableCommand for SetCellTextColor {
    fn apply(&self, tree: &TableTree, selection: &Selection) -> Result<CommandOutcome> {
        let Some(cell_id) = focused_cell(tree, selection) else {
            return Ok(CommandOutcome::NotApplicable);
        };
        let mut new_tree = tree.clone();
        if let Some(cell) = new_tree.get_cell_mut(cell_id) {
            cell.attrs.text_color = Some(self.color.clone());
        }
        Ok(CommandOutcome::applied(new_tree, *selection))
    }

    fn display_name(&self) -> &str {
        "Set Cell Text Color"
    }
}

/// Set the border color of the focused cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCellBorderColor {
    pub color: String,
}

impl TableCommand for SetCellBorderColor {
    fn apply(&self, tree: &TableTree, selection: &Selection) -> Result<CommandOutcome> {
        let Some(cell_id) = focused_cell(tree, selection) else {
            return Ok(CommandOutcome::NotApplicable);
        };
        let mut new_tree = tree.clone();
        if let Some(cell) = new_tree.get_cell_mut(cell_id) {
            cell.attrs.border_color = Some(self.color.clone());
        }
        Ok(CommandOutcome::applied(new_tree, *selection))
    }

    fn display_name(&self) -> &str {
        "Set Cell Border Color"
    }
}

/// Set the font weight of the focused cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCellTextWeight {
    pub weight: TextWeight,
}

impl TableCommand for SetCellTextWeight {
    fn apply(&self, tree: &TableTree, selection: &Selection) -> Result<CommandOutcome> {
        let Some(cell_id) = focused_cell(tree, selection) else {
            return Ok(CommandOutcome::NotApplicable);
        };
        let mut new_tree = tree.clone();
        if let Some(cell) = new_tree.get_cell_mut(cell_id) {
            cell.attrs.text_weight = Some(self.weight);
        }
        Ok(CommandOutcome::applied(new_tree, *selection))
    }

    fn display_name(&self) -> &str {
        "Set Cell Text Weight"
    }
}

/// Set the vertical alignment of the focused cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCellVerticalAlign {
    pub align: VerticalAlign,
}

impl TableCommand for SetCellVerticalAlign {
    fn apply(&self, tree: &TableTree, selection: &Selection) -> Result<CommandOutcome> {
        let Some(cell_id) = focused_cell(tree, selection) else {
            return Ok(CommandOutcome::NotApplicable);
        };
        let mut new_tree = tree.clone();
        if let Some(cell) = new_tree.get_cell_mut(cell_id) {
            cell.attrs.vertical_align = Some(self.align);
        }
        Ok(CommandOutcome::applied(new_tree, *selection))
    }

    fn display_name(&self) -> &str {
        "Set Cell Vertical Align"
    }
}

/// Set which border edges of the focused cell are drawn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCellBorderEdges {
    pub edges: BorderEdges,
}

impl TableCommand for SetCellBorderEdges {
    fn apply(&self, tree: &TableTree, selection: &Selection) -> Result<CommandOutcome> {
        let Some(cell_id) = focused_cell(tree, selection) else {
            return Ok(CommandOutcome::NotApplicable);
        };
        let mut new_tree = tree.clone();
        if let Some(cell) = new_tree.get_cell_mut(cell_id) {
            // All edges on is the default; store it as unset
            cell.attrs.border_edges = if self.edges.is_full() {
                None
            } else {
                Some(self.edges)
            };
        }
        Ok(CommandOutcome::applied(new_tree, *selection))
    }

    fn display_name(&self) -> &str {
        "Set Cell Border Edges"
    }
}

/// Reset the focused cell's visual attributes to defaults; spans and
/// column widths are untouched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearCellFormatting;

impl TableCommand for ClearCellFormatting {
    fn apply(&self, tree: &TableTree, selection: &Selection) -> Result<CommandOutcome> {
        let Some(cell_id) = focused_cell(tree, selection) else {
            return Ok(CommandOutcome::NotApplicable);
        };
        let mut new_tree = tree.clone();
        if let Some(cell) = new_tree.get_cell_mut(cell_id) {
            cell.attrs.clear_formatting();
        }
        Ok(CommandOutcome::applied(new_tree, *selection))
    }

    fn display_name(&self) -> &str {
        "Clear Cell Formatting"
    }
}

// =============================================================================
// Table Attribute Commands
// =============================================================================

/// Set the alignment of the focused table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetTableAlignment {
    pub alignment: TableAlignment,
}

impl SetTableAlignment {
    pub fn new(alignment: TableAlignment) -> Self {
        Self { alignment }
    }
}

impl TableCommand for SetTableAlignment {
    fn apply(&self, tree: &TableTree, selection: &Selection) -> Result<CommandOutcome> {
        let Some(table_id) = focused_table(tree, selection) else {
            return Ok(CommandOutcome::NotApplicable);
        };
        let mut new_tree = tree.clone();
        if let Some(table) = new_tree.get_table_mut(table_id) {
            table.attrs.alignment = self.alignment;
        }
        Ok(CommandOutcome::applied(new_tree, *selection))
    }

    fn display_name(&self) -> &str {
        "Set Table Alignment"
    }
}

/// Apply a theme preset to the focused table. Unrecognized names resolve
/// to the default preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyTableTheme {
    pub theme: String,
}

impl ApplyTableTheme {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
        }
    }
}

impl TableCommand for ApplyTableTheme {
    fn apply(&self, tree: &TableTree, selection: &Selection) -> Result<CommandOutcome> {
        let Some(table_id) = focused_table(tree, selection) else {
            return Ok(CommandOutcome::NotApplicable);
        };
        let mut new_tree = tree.clone();
        let preset = new_tree.themes.lookup(&self.theme).clone();
        if let Some(table) = new_tree.get_table_mut(table_id) {
            preset.apply_to(&mut table.attrs);
        }
        Ok(CommandOutcome::applied(new_tree, *selection))
    }

    fn display_name(&self) -> &str {
        "Apply Table Theme"
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use table_model::{Position, TableTree};

    fn tree_with_table() -> (TableTree, Selection) {
        let mut tree = TableTree::with_empty_paragraph();
        let table_id = tree.build_table(2, 2, false).unwrap();
        let first = tree.cells_in_order(table_id)[0];
        (tree, Selection::at_start_of(first))
    }

    fn outside_selection(tree: &TableTree) -> Selection {
        Selection::at_start_of(tree.document.children()[0])
    }

    #[test]
    fn test_insert_table_selects_first_cell() {
        let tree = TableTree::with_empty_paragraph();
        let selection = outside_selection(&tree);

        let outcome = InsertTable::new(2, 3).apply(&tree, &selection).unwrap();
        let CommandOutcome::Applied { tree, selection } = outcome else {
            panic!("expected applied");
        };

        let table_id = tree.containing_table(selection.focus.node_id).unwrap();
        assert_eq!(tree.column_count(table_id), 3);
        assert_eq!(tree.header_row_count(table_id), 1);
        assert!(selection.is_collapsed());
        assert_eq!(selection.focus, Position::start_of(tree.cells_in_order(table_id)[0]));
    }

    #[test]
    fn test_set_cell_background() {
        let (tree, selection) = tree_with_table();

        let outcome = SetCellBackground::new("#ff0000")
            .apply(&tree, &selection)
            .unwrap();
        let CommandOutcome::Applied { tree: new_tree, .. } = outcome else {
            panic!("expected applied");
        };

        let cell_id = selection.focus.node_id;
        assert_eq!(
            new_tree.get_cell(cell_id).unwrap().attrs.background_color,
            Some("#ff0000".to_string())
        );
        // Original tree untouched
        assert_eq!(tree.get_cell(cell_id).unwrap().attrs.background_color, None);
    }

    #[test]
    fn test_cell_command_not_applicable_outside_table() {
        let (tree, _) = tree_with_table();
        let selection = outside_selection(&tree);

        let outcome = SetCellBackground::new("#ff0000")
            .apply(&tree, &selection)
            .unwrap();
        assert!(!outcome.is_applied());

        let outcome = SetTableAlignment::new(TableAlignment::Left)
            .apply(&tree, &selection)
            .unwrap();
        assert!(!outcome.is_applied());
    }

    #[test]
    fn test_unset_background_after_theme() {
        let (tree, selection) = tree_with_table();
        let cell_id = selection.focus.node_id;

        let CommandOutcome::Applied { tree, .. } = SetCellBackground::new("#ff0000")
            .apply(&tree, &selection)
            .unwrap()
        else {
            panic!("expected applied");
        };
        let CommandOutcome::Applied { tree, .. } = ApplyTableTheme::new("striped")
            .apply(&tree, &selection)
            .unwrap()
        else {
            panic!("expected applied");
        };
        let CommandOutcome::Applied { tree, .. } =
            UnsetCellBackground.apply(&tree, &selection).unwrap()
        else {
            panic!("expected applied");
        };

        // The cell has no explicit background; the theme renders it
        assert_eq!(tree.get_cell(cell_id).unwrap().attrs.background_color, None);
        let table_id = tree.containing_table(cell_id).unwrap();
        assert_eq!(tree.get_table(table_id).unwrap().attrs.theme, "striped");
    }

    #[test]
    fn test_set_table_alignment() {
        let (tree, selection) = tree_with_table();

        let CommandOutcome::Applied { tree, .. } = SetTableAlignment::new(TableAlignment::Right)
            .apply(&tree, &selection)
            .unwrap()
        else {
            panic!("expected applied");
        };

        let table_id = tree.containing_table(selection.focus.node_id).unwrap();
        assert_eq!(
            tree.get_table(table_id).unwrap().attrs.alignment,
            TableAlignment::Right
        );
    }

    #[test]
    fn test_clear_formatting_preserves_spans() {
        let (mut tree, selection) = tree_with_table();
        let cell_id = selection.focus.node_id;
        {
            let cell = tree.get_cell_mut(cell_id).unwrap();
            cell.attrs.background_color = Some("#ff0000".to_string());
            cell.attrs.text_weight = Some(TextWeight::Bold);
            cell.attrs.rowspan = 2;
        }

        let CommandOutcome::Applied { tree, .. } =
            ClearCellFormatting.apply(&tree, &selection).unwrap()
        else {
            panic!("expected applied");
        };

        let attrs = &tree.get_cell(cell_id).unwrap().attrs;
        assert_eq!(attrs.background_color, None);
        assert_eq!(attrs.text_weight, None);
        assert_eq!(attrs.rowspan, 2);
    }

    #[test]
    fn test_full_border_edges_stored_as_unset() {
        let (tree, selection) = tree_with_table();

        let CommandOutcome::Applied { tree, .. } = SetCellBorderEdges {
            edges: BorderEdges::all(),
        }
        .apply(&tree, &selection)
        .unwrap()
        else {
            panic!("expected applied");
        };

        let cell_id = selection.focus.node_id;
        assert_eq!(tree.get_cell(cell_id).unwrap().attrs.border_edges, None);
    }
}
