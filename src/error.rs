//! Error types for magnascale
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for building and running menus
#[derive(Error, Debug)]
pub enum MenuError {
    /// A mutation would mix actions and submenus on one node
    #[error("invalid menu structure at '{path}': {reason}")]
    InvalidStructure { path: String, reason: String },

    /// The root menu can never carry an action
    #[error("invalid menu structure: the root menu cannot have an action")]
    RootAction,

    /// A leaf action returned an error; the session ends here
    #[error("action '{path}' failed: {source}")]
    ActionFailed {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    /// Terminal IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl MenuError {
    pub(crate) fn has_children(path: impl Into<String>) -> Self {
        MenuError::InvalidStructure {
            path: path.into(),
            reason: "menu already has submenus and cannot be an action".to_string(),
        }
    }

    pub(crate) fn has_action(path: impl Into<String>) -> Self {
        MenuError::InvalidStructure {
            path: path.into(),
            reason: "menu is an action and cannot have submenus".to_string(),
        }
    }

    /// Whether this error comes from building the tree rather than running it
    pub fn is_structure_error(&self) -> bool {
        matches!(
            self,
            MenuError::InvalidStructure { .. } | MenuError::RootAction
        )
    }
}
