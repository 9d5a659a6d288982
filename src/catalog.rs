//! Default fleet menu
//!
//! Wires the cluster and node operations into a [`MenuTree`]:
//!
//! ```text
//! Main
//! ├─ cluster
//! │  ├─ maintenance-mode
//! │  │  ├─ enter
//! │  │  └─ exit
//! │  ├─ refresh
//! │  └─ power-off
//! └─ node
//!    ├─ power-off
//!    │  └─ <one entry per configured node>
//!    └─ discover
//! ```

use std::cell::{Ref, RefCell};
use std::io::{self, Write};
use std::rc::Rc;

use tracing::info;

use crate::config::Config;
use crate::error::MenuResult;
use crate::menu::{Action, DynamicAction, MenuTree};

/// Operations the fleet menu dispatches to
pub trait FleetOperations {
    fn enter_maintenance(&self) -> anyhow::Result<()>;
    fn exit_maintenance(&self) -> anyhow::Result<()>;
    fn refresh_cluster(&self) -> anyhow::Result<()>;
    fn power_off_cluster(&self) -> anyhow::Result<()>;
    fn power_off_node(&self, node: &str) -> anyhow::Result<()>;
    fn discover_nodes(&self) -> anyhow::Result<()>;
}

/// Announces each requested operation on its writer and in the log.
///
/// Stands in until the menu is wired to real cluster management.
#[derive(Debug)]
pub struct ReportingOperations<W = io::Stdout> {
    out: RefCell<W>,
}

impl ReportingOperations {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportingOperations<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn output(&self) -> Ref<'_, W> {
        self.out.borrow()
    }

    fn report(&self, operation: &str, target: &str) -> anyhow::Result<()> {
        info!(operation, target, "operation requested");
        let mut out = self.out.borrow_mut();
        writeln!(out, "Requested {} for {}.", operation, target)?;
        out.flush()?;
        Ok(())
    }
}

impl<W: Write> FleetOperations for ReportingOperations<W> {
    fn enter_maintenance(&self) -> anyhow::Result<()> {
        self.report("enter maintenance mode", "the cluster")
    }

    fn exit_maintenance(&self) -> anyhow::Result<()> {
        self.report("exit maintenance mode", "the cluster")
    }

    fn refresh_cluster(&self) -> anyhow::Result<()> {
        self.report("refresh", "the cluster")
    }

    fn power_off_cluster(&self) -> anyhow::Result<()> {
        self.report("power off", "the cluster")
    }

    fn power_off_node(&self, node: &str) -> anyhow::Result<()> {
        self.report("power off", node)
    }

    fn discover_nodes(&self) -> anyhow::Result<()> {
        self.report("node discovery", "the fleet")
    }
}

/// Build the fleet menu for `config`.
///
/// The root takes `config.menu.root_name`; `node > power-off` gets one
/// dynamic entry per name in `config.fleet.nodes`, all sharing one action.
pub fn build_menu(config: &Config, ops: Rc<dyn FleetOperations>) -> MenuResult<MenuTree> {
    let mut tree = MenuTree::new(config.menu.root_name.as_str());

    let fixed = |f: fn(&dyn FleetOperations) -> anyhow::Result<()>| {
        let ops = Rc::clone(&ops);
        Action::fixed(move || f(&*ops))
    };

    tree.set_action(
        &["cluster", "maintenance-mode", "enter"],
        fixed(|ops| ops.enter_maintenance()),
    )?;
    tree.set_action(
        &["cluster", "maintenance-mode", "exit"],
        fixed(|ops| ops.exit_maintenance()),
    )?;
    tree.set_action(&["cluster", "refresh"], fixed(|ops| ops.refresh_cluster()))?;
    tree.set_action(&["cluster", "power-off"], fixed(|ops| ops.power_off_cluster()))?;

    let node_ops = Rc::clone(&ops);
    let power_off: DynamicAction = Rc::new(move |node: &str| node_ops.power_off_node(node));
    if config.fleet.nodes.is_empty() {
        tree.ensure_path(&["node", "power-off"])?;
    } else {
        tree.add_dynamic_siblings(&["node", "power-off"], config.fleet.nodes.as_slice(), power_off)?;
    }
    tree.set_action(&["node", "discover"], fixed(|ops| ops.discover_nodes()))?;

    Ok(tree)
}
