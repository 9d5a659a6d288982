use std::io;
use std::rc::Rc;

use anyhow::Result;
use magnascale::ui::{Console, UiContext};
use magnascale::{build_menu, Config, Navigator, ReportingOperations, SessionEnd, SystemShell};
use tracing::info;

pub fn cmd_run(config: &Config, ui: &UiContext) -> Result<()> {
    let tree = build_menu(config, Rc::new(ReportingOperations::stdout()))?;
    let shell = SystemShell::from_config(&config.shell);
    info!(
        root = %config.menu.root_name,
        nodes = config.fleet.nodes.len(),
        shell = shell.program(),
        interactive = ui.caps.is_interactive,
        "starting menu session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), ui);

    match Navigator::new(&tree, &shell).run(&mut console)? {
        SessionEnd::Completed => info!("session completed"),
        SessionEnd::InputClosed => {
            // Leave the dangling prompt on its own line.
            console.blank()?;
            info!("input closed, session ended");
        }
    }
    Ok(())
}
