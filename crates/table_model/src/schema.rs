//! Attribute schema - per-node-type defaults, tags, and parse rules
//!
//! The schema is assembled once in `Schema::new()`: the header-cell schema
//! is the body-cell base with its tag overridden. Parse helpers accept
//! only well-formed values; anything else is absent, never an error.

use crate::{CellAttrs, TableAttrs};
use serde::Serialize;

// =============================================================================
// Node Schemas
// =============================================================================

/// Schema for one cell node type. Serializable for diagnostics only; the
/// schema is built in code and never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellSchema {
    /// HTML tag this cell type serializes to
    pub tag: &'static str,
    /// Default attribute values
    pub defaults: CellAttrs,
}

/// Schema for the table node type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    /// Default attribute values
    pub defaults: TableAttrs,
}

/// Resolved attribute schema for the whole node family. Built once and
/// treated as immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub table: TableSchema,
    pub body_cell: CellSchema,
    pub header_cell: CellSchema,
}

impl Schema {
    /// Assemble the schema: body cell is the base, header cell overrides
    /// only the tag
    pub fn new() -> Self {
        let body_cell = CellSchema {
            tag: "td",
            defaults: CellAttrs::default(),
        };
        let header_cell = CellSchema {
            tag: "th",
            ..body_cell.clone()
        };
        Self {
            table: TableSchema {
                defaults: TableAttrs::default(),
            },
            body_cell,
            header_cell,
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Parse Helpers
// =============================================================================

/// Parse a strictly positive integer. Non-numeric, zero, or negative
/// source values are absent, not zero and not an error.
pub fn parse_positive_int(s: &str) -> Option<u32> {
    let value: u32 = s.trim().parse().ok()?;
    if value > 0 {
        Some(value)
    } else {
        None
    }
}

/// Parse a non-negative integer, optionally suffixed with `px`
pub fn parse_px(s: &str) -> Option<u32> {
    s.trim().trim_end_matches("px").trim().parse().ok()
}

/// Parse a comma-separated list of positive pixel widths
/// (`data-colwidth="100,120"`). Any invalid entry makes the whole list
/// absent.
pub fn parse_colwidth(s: &str) -> Option<Vec<u32>> {
    let widths: Option<Vec<u32>> = s.split(',').map(parse_positive_int).collect();
    widths.filter(|w| !w.is_empty())
}

// =============================================================================
// Tests
// =============================================================================
