//! Interactive menu navigation
//!
//! The navigator shows the menu at the top of a stack of node ids and reads
//! one numbered choice at a time:
//!
//! - choosing a submenu pushes it;
//! - choosing a leaf pushes it, runs its action, and pops it again, so the
//!   operator lands back on the menu the leaf was chosen from;
//! - `Back` pops the current menu, and popping the root ends the session;
//! - `99` at the root (never listed) opens the shell escape.
//!
//! Bad input is reported and the same menu is shown again. A failing action is
//! not recovered: its error is returned from [`Navigator::run`] and ends the
//! session, while failures inside the shell escape never leave it.

mod choice;
mod render;

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::{MenuError, MenuResult};
use crate::menu::{MenuTree, NodeId};
use crate::shell::{CommandRunner, ShellEscape, ShellExit};
use crate::ui::Console;

pub use choice::{parse_choice, Choice, SHELL_SHORTCUT};
pub use render::{BACK_LABEL, PATH_HEADER};

/// Prompt printed below every menu
pub const CHOICE_PROMPT: &str = "Please enter your choice: ";

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter a number.";
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please try again.";

/// Why a session ended without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Operator chose Back at the root menu
    Completed,
    /// Input closed before the operator left the root menu
    InputClosed,
}

pub struct Navigator<'a, C: ?Sized> {
    tree: &'a MenuTree,
    runner: &'a C,
}

impl<'a, C: CommandRunner + ?Sized> Navigator<'a, C> {
    pub fn new(tree: &'a MenuTree, runner: &'a C) -> Self {
        Self { tree, runner }
    }

    /// Run the session from the root menu until the operator backs out of it.
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> MenuResult<SessionEnd> {
        let tree = self.tree;
        let mut stack: Vec<NodeId> = vec![tree.root()];

        while let Some(&current) = stack.last() {
            let node = tree.node(current);

            if node.is_leaf() {
                self.execute(current)?;
                stack.pop();
                continue;
            }

            render::render_menu(console, tree, current)?;
            let Some(line) = console.read_line(CHOICE_PROMPT)? else {
                info!(menu = %tree.full_path(current), "input closed, ending session");
                return Ok(SessionEnd::InputClosed);
            };

            match parse_choice(&line, node.children().len(), node.is_root()) {
                Choice::Child(index) => {
                    let child = node.children()[index];
                    debug!(menu = %tree.full_path(child), "descend");
                    stack.push(child);
                }
                Choice::Back => {
                    debug!(menu = %tree.full_path(current), "back");
                    stack.pop();
                }
                Choice::Shell => {
                    if ShellEscape::new(self.runner).run(console)? == ShellExit::InputClosed {
                        return Ok(SessionEnd::InputClosed);
                    }
                }
                Choice::NotANumber => console.warn(INVALID_INPUT_MESSAGE)?,
                Choice::OutOfRange => console.warn(INVALID_CHOICE_MESSAGE)?,
            }
        }

        Ok(SessionEnd::Completed)
    }

    fn execute(&self, id: NodeId) -> MenuResult<()> {
        let node = self.tree.node(id);
        info!(
            menu = %self.tree.full_path(id),
            dynamic = node.is_dynamic(),
            "running action"
        );

        node.action()
            .invoke(node.name())
            .map_err(|source| MenuError::ActionFailed {
                path: self.tree.full_path(id),
                source,
            })
    }
}
