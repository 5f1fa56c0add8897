//! Command system for table editing
//!
//! Commands apply against an immutable tree and produce a new tree plus
//! selection. A command that has nothing to act on (no cell or table
//! focused) reports `NotApplicable` instead of failing; the caller decides
//! whether to fall through to default behavior. Errors are reserved for
//! genuine inconsistencies.

use crate::Result;
use table_model::{NodeId, Selection, TableTree};

/// Result of applying a command
#[derive(Debug)]
pub enum CommandOutcome {
    /// The command ran; here is the new document state
    Applied {
        tree: TableTree,
        selection: Selection,
    },
    /// The command had no target in the current selection context
    NotApplicable,
}

impl CommandOutcome {
    /// Shorthand constructor for the applied case
    pub fn applied(tree: TableTree, selection: Selection) -> Self {
        Self::Applied { tree, selection }
    }

    /// Check whether the command ran
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Trait for all table editing commands
pub trait TableCommand: std::fmt::Debug + Send + Sync {
    /// Apply this command to a document
    fn apply(&self, tree: &TableTree, selection: &Selection) -> Result<CommandOutcome>;

    /// Get a display name for this command
    fn display_name(&self) -> &str;
}

/// The cell containing the selection focus, if any
pub fn focused_cell(tree: &TableTree, selection: &Selection) -> Option<NodeId> {
    tree.containing_cell(selection.focus.node_id)
}

/// The table containing the selection focus, if any
pub fn focused_table(tree: &TableTree, selection: &Selection) -> Option<NodeId> {
    tree.containing_table(selection.focus.node_id)
}
