//! Keyboard routing for table navigation keys
//!
//! An ordered list of (key, predicate, command) bindings evaluated against
//! the current focus context. A binding whose predicate rejects, or whose
//! command reports `NotApplicable`, passes the key through so the hosting
//! editor keeps its default behavior (e.g. a literal tab outside tables).

use crate::{CommandOutcome, GoToNextCell, GoToPreviousCell, Result, TableCommand};
use table_model::{Selection, TableTree};

/// Keys the table subsystem intercepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Tab,
    ShiftTab,
}

/// What happened to a routed key
#[derive(Debug)]
pub enum KeyDisposition {
    /// A binding consumed the key; here is the new document state
    Handled {
        tree: TableTree,
        selection: Selection,
    },
    /// No binding applied; the host should run its default handling
    PassThrough,
}

type Predicate = fn(&TableTree, &Selection) -> bool;

/// One (key, predicate, command) binding
struct KeyBinding {
    key: EditorKey,
    predicate: Predicate,
    command: Box<dyn TableCommand>,
}

/// Router for navigation keys while editing
pub struct KeyboardRouter {
    bindings: Vec<KeyBinding>,
}

fn focus_in_table(tree: &TableTree, selection: &Selection) -> bool {
    tree.containing_cell(selection.focus.node_id).is_some()
}

impl KeyboardRouter {
    /// Create a router with the default table bindings
    pub fn new() -> Self {
        let mut router = Self {
            bindings: Vec::new(),
        };
        router.bind(EditorKey::Tab, focus_in_table, Box::new(GoToNextCell));
        router.bind(
            EditorKey::ShiftTab,
            focus_in_table,
            Box::new(GoToPreviousCell),
        );
        router
    }

    /// Append a binding; bindings are tried in registration order
    pub fn bind(&mut self, key: EditorKey, predicate: Predicate, command: Box<dyn TableCommand>) {
        self.bindings.push(KeyBinding {
            key,
            predicate,
            command,
        });
    }

    /// Route a key press against the current document state
    pub fn route(
        &self,
        key: EditorKey,
        tree: &TableTree,
        selection: &Selection,
    ) -> Result<KeyDisposition> {
        for binding in self.bindings.iter().filter(|b| b.key == key) {
            if !(binding.predicate)(tree, selection) {
                continue;
            }
            match binding.command.apply(tree, selection)? {
                CommandOutcome::Applied { tree, selection } => {
                    return Ok(KeyDisposition::Handled { tree, selection });
                }
                CommandOutcome::NotApplicable => continue,
            }
        }
        Ok(KeyDisposition::PassThrough)
    }
}

impl Default for KeyboardRouter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use table_model::Position;

    #[test]
    fn test_tab_moves_to_next_cell() {
        let mut tree = TableTree::new();
        let table_id = tree.build_table(2, 2, false).unwrap();
        let cells = tree.cells_in_order(table_id);
        let selection = Selection::at_start_of(cells[0]);

        let router = KeyboardRouter::new();
        let disposition = router.route(EditorKey::Tab, &tree, &selection).unwrap();

        let KeyDisposition::Handled { selection, .. } = disposition else {
            panic!("expected handled");
        };
        assert_eq!(selection.focus, Position::start_of(cells[1]));
    }

    #[test]
    fn test_shift_tab_moves_back() {
        let mut tree = TableTree::new();
        let table_id = tree.build_table(1, 2, false).unwrap();
        let cells = tree.cells_in_order(table_id);
        let selection = Selection::at_start_of(cells[1]);

        let router = KeyboardRouter::new();
        let disposition = router
            .route(EditorKey::ShiftTab, &tree, &selection)
            .unwrap();

        let KeyDisposition::Handled { selection, .. } = disposition else {
            panic!("expected handled");
        };
        assert_eq!(selection.focus, Position::start_of(cells[0]));
    }

    #[test]
    fn test_tab_passes_through_outside_table() {
        let tree = TableTree::with_empty_paragraph();
        let selection = Selection::at_start_of(tree.document.children()[0]);

        let router = KeyboardRouter::new();
        let disposition = router.route(EditorKey::Tab, &tree, &selection).unwrap();
        assert!(matches!(disposition, KeyDisposition::PassThrough));
    }

    #[test]
    fn test_tab_at_last_cell_is_swallowed() {
        let mut tree = TableTree::new();
        let table_id = tree.build_table(1, 1, false).unwrap();
        let cells = tree.cells_in_order(table_id);
        let selection = Selection::at_start_of(cells[0]);

        let router = KeyboardRouter::new();
        let disposition = router.route(EditorKey::Tab, &tree, &selection).unwrap();

        // Inside a table the key is consumed even at the boundary; a
        // literal tab must not land in the cell
        let KeyDisposition::Handled {
            selection: new_selection,
            ..
        } = disposition
        else {
            panic!("expected handled");
        };
        assert_eq!(new_selection, selection);
    }
}
