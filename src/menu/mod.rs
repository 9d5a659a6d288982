//! Menu tree model
//!
//! # Module Structure
//!
//! - `action` - Static and per-target actions bound to leaves
//! - `node` - MenuNode data and NodeId handles
//! - `tree` - MenuTree builder (path insertion, dynamic sibling groups)
//! - `outline` - Serializable snapshot used for listing

mod action;
mod node;
mod outline;
mod tree;

pub use action::{Action, DynamicAction, StaticAction};
pub use node::{MenuNode, NodeId};
pub use outline::{MenuKind, MenuOutline};
pub use tree::{MenuTree, PATH_SEPARATOR};
