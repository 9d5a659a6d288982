//! Magnascale - interactive fleet administration menu
//!
//! Magnascale presents a tree of numbered menus to an operator, runs the
//! operation bound to the chosen entry, and returns to the enclosing menu.
//! A hidden choice (`99`) at the root opens an unrestricted shell passthrough.

pub mod catalog;
pub mod config;
pub mod error;
pub mod menu;
pub mod navigator;
pub mod shell;
pub mod ui;

// Re-exports for convenience
pub use catalog::{build_menu, FleetOperations, ReportingOperations};
pub use config::Config;
pub use error::{MenuError, MenuResult};
pub use menu::{Action, MenuNode, MenuOutline, MenuTree, NodeId};
pub use navigator::{Navigator, SessionEnd};
pub use shell::{CommandOutput, CommandRunner, ShellEscape, SystemShell};
