//! Table Model - node types, attributes, tree storage, and themes
//!
//! This crate provides the document-node model for the editor's table
//! subsystem: typed attribute structs with schema defaults, flat tree
//! storage with stable node IDs, the selection model, and the theme
//! preset registry.

mod attrs;
mod document;
mod error;
mod node;
mod node_id;
pub mod schema;
mod selection;
mod table;
pub mod theme;
mod tree;

pub use attrs::*;
pub use document::*;
pub use error::*;
pub use node::*;
pub use node_id::*;
pub use schema::*;
pub use selection::*;
pub use table::*;
pub use theme::*;
pub use tree::*;
