//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MenuResult;
use crate::menu::MenuTree;

use super::loader::{self, ConfigWarning};

/// Menu layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Name of the root menu, first segment of every displayed path
    #[serde(default = "default_root_name")]
    pub root_name: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
        }
    }
}

fn default_root_name() -> String {
    MenuTree::DEFAULT_ROOT.to_string()
}

/// Nodes offered by per-node menus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetConfig {
    #[serde(default = "default_nodes")]
    pub nodes: Vec<String>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
        }
    }
}

fn default_nodes() -> Vec<String> {
    vec!["node1".to_string(), "node2".to_string(), "node3".to_string()]
}

/// Command interpreter used by the shell escape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShellConfig {
    /// Interpreter program; platform default when unset
    #[serde(default)]
    pub program: Option<String>,

    /// Flag that makes `program` run its next argument as a command line
    #[serde(default)]
    pub flag: Option<String>,
}

impl ShellConfig {
    /// Resolved `(program, flag)` pair
    pub fn interpreter(&self) -> (String, String) {
        let (default_program, default_flag) = if cfg!(windows) {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        };
        (
            self.program
                .clone()
                .unwrap_or_else(|| default_program.to_string()),
            self.flag.clone().unwrap_or_else(|| default_flag.to_string()),
        )
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub fleet: FleetConfig,

    #[serde(default)]
    pub shell: ShellConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}
