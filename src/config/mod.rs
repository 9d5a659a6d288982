//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MAGNASCALE_*)
//! 3. `--config <path>` or `./magnascale.toml`
//! 4. User config (`<config dir>/magnascale/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load, load_with_warnings, user_config_path, with_env_overrides, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, FleetConfig, MenuConfig, OutputConfig, ShellConfig};
