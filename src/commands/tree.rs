use std::io::{self, Write};
use std::rc::Rc;

use anyhow::Result;
use magnascale::ui::{json, UiContext};
use magnascale::{build_menu, Config, MenuOutline, ReportingOperations};
use tracing::info;

pub fn cmd_tree(config: &Config, ui: &UiContext) -> Result<()> {
    let tree = build_menu(config, Rc::new(ReportingOperations::stdout()))?;
    let outline = MenuOutline::from_tree(&tree);
    info!(
        entries = tree.node_count(),
        actions = outline.action_count(),
        json = ui.json,
        "printing menu outline"
    );

    let mut out = io::stdout().lock();
    if ui.json {
        json::write_document(&mut out, &outline)?;
    } else {
        write!(out, "{}", outline.render(ui.color, ui.unicode))?;
    }
    out.flush()?;
    Ok(())
}
