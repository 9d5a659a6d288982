//! Terminal presentation: capabilities, design tokens, styled text and the
//! operator console.

pub mod console;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;

pub use console::Console;
pub use context::{ColorWhen, UiContext};
