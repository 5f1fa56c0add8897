//! Table Engine - commands, navigation, selection projection, keyboard routing
//!
//! Commands mutate table and cell attributes through a cloned tree and
//! report applicability instead of throwing; the projection derives a
//! typed view of what table region is selected; the keyboard router maps
//! Tab/Shift+Tab to structural cell moves while focus is inside a table.

mod command;
mod error;
mod keyboard;
mod navigation;
mod projection;
mod table_commands;

pub use command::*;
pub use error::*;
pub use keyboard::*;
pub use navigation::*;
pub use projection::*;
pub use table_commands::*;
