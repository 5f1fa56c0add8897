//! Cell navigation - row-major movement between cells
//!
//! Movement wraps at row boundaries. At the last cell of the last row
//! moving forward (and symmetrically at the first cell moving backward)
//! the command is a handled no-op: the document and selection stay
//! unchanged, and no new row is created.

use crate::{focused_cell, CommandOutcome, Result, TableCommand};
use serde::{Deserialize, Serialize};
use table_model::{NodeId, Position, Selection, TableTree};

/// Direction for cell navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

/// The adjacent cell in row-major order, None at the grid boundary
pub fn adjacent_cell(tree: &TableTree, cell_id: NodeId, direction: Direction) -> Option<NodeId> {
    let table_id = tree.containing_table(cell_id)?;
    let cells = tree.cells_in_order(table_id);
    let index = cells.iter().position(|&id| id == cell_id)?;

    match direction {
        Direction::Forward => cells.get(index + 1).copied(),
        Direction::Backward => index.checked_sub(1).and_then(|i| cells.get(i).copied()),
    }
}

fn navigate(
    tree: &TableTree,
    selection: &Selection,
    direction: Direction,
) -> Result<CommandOutcome> {
    let Some(cell_id) = focused_cell(tree, selection) else {
        return Ok(CommandOutcome::NotApplicable);
    };

    match adjacent_cell(tree, cell_id, direction) {
        Some(next_id) => Ok(CommandOutcome::applied(
            tree.clone(),
            Selection::collapsed(Position::start_of(next_id)),
        )),
        // Grid boundary: handled, nothing moves
        None => Ok(CommandOutcome::applied(tree.clone(), *selection)),
    }
}

/// Move focus to the next cell in row-major order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoToNextCell;

impl TableCommand for GoToNextCell {
    fn apply(&self, tree: &TableTree, selection: &Selection) -> Result<CommandOutcome> {
        navigate(tree, selection, Direction::Forward)
    }

    fn display_name(&self) -> &str {
        "Go To Next Cell"
    }
}

/// Move focus to the previous cell in row-major order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoToPreviousCell;

impl TableCommand for GoToPreviousCell {
    fn apply(&self, tree: &TableTree, selection: &Selection) -> Result<CommandOutcome> {
        navigate(tree, selection, Direction::Backward)
    }

    fn display_name(&self) -> &str {
        "Go To Previous Cell"
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_2x2() -> (TableTree, Vec<NodeId>) {
        let mut tree = TableTree::new();
        let table_id = tree.build_table(2, 2, false).unwrap();
        let cells = tree.cells_in_order(table_id);
        (tree, cells)
    }

    #[test]
    fn test_forward_within_row() {
        let (tree, cells) = tree_2x2();
        assert_eq!(
            adjacent_cell(&tree, cells[0], Direction::Forward),
            Some(cells[1])
        );
    }

    #[test]
    fn test_forward_wraps_to_next_row() {
        let (tree, cells) = tree_2x2();
        assert_eq!(
            adjacent_cell(&tree, cells[1], Direction::Forward),
            Some(cells[2])
        );
    }

    #[test]
    fn test_backward_wraps_to_previous_row() {
        let (tree, cells) = tree_2x2();
        assert_eq!(
            adjacent_cell(&tree, cells[2], Direction::Backward),
            Some(cells[1])
        );
    }

    #[test]
    fn test_next_cell_noop_at_last_cell() {
        let (tree, cells) = tree_2x2();
        let selection = Selection::at_start_of(cells[3]);

        let outcome = GoToNextCell.apply(&tree, &selection).unwrap();
        let CommandOutcome::Applied {
            tree: new_tree,
            selection: new_selection,
        } = outcome
        else {
            panic!("expected applied no-op");
        };

        // Document and selection unchanged, no row created
        assert_eq!(new_selection, selection);
        assert_eq!(new_tree.nodes.rows.len(), tree.nodes.rows.len());
        assert_eq!(new_tree.nodes.cells.len(), tree.nodes.cells.len());
    }

    #[test]
    fn test_previous_cell_noop_at_first_cell() {
        let (tree, cells) = tree_2x2();
        let selection = Selection::at_start_of(cells[0]);

        let outcome = GoToPreviousCell.apply(&tree, &selection).unwrap();
        let CommandOutcome::Applied {
            selection: new_selection,
            ..
        } = outcome
        else {
            panic!("expected applied no-op");
        };
        assert_eq!(new_selection, selection);
    }

    #[test]
    fn test_not_applicable_outside_table() {
        let tree = TableTree::with_empty_paragraph();
        let selection = Selection::at_start_of(tree.document.children()[0]);

        let outcome = GoToNextCell.apply(&tree, &selection).unwrap();
        assert!(!outcome.is_applied());
    }

    proptest::proptest! {
        #[test]
        fn prop_forward_walk_covers_grid_in_order(rows in 1usize..=4, cols in 1usize..=4) {
            let mut tree = TableTree::new();
            let table_id = tree.build_table(rows, cols, false).unwrap();
            let cells = tree.cells_in_order(table_id);

            let mut current = cells[0];
            for &expected in &cells[1..] {
                current = adjacent_cell(&tree, current, Direction::Forward).unwrap();
                proptest::prop_assert_eq!(current, expected);
            }
            proptest::prop_assert_eq!(adjacent_cell(&tree, current, Direction::Forward), None);
        }
    }

    #[test]
    fn test_navigation_moves_caret_to_cell_start() {
        let (tree, cells) = tree_2x2();
        let selection = Selection::at_start_of(cells[0]);

        let CommandOutcome::Applied {
            selection: new_selection,
            ..
        } = GoToNextCell.apply(&tree, &selection).unwrap()
        else {
            panic!("expected applied");
        };
        assert_eq!(new_selection.focus, Position::start_of(cells[1]));
        assert!(new_selection.is_collapsed());
    }
}
