//! Menu screen rendering.

use std::io::{self, BufRead, Write};

use crate::menu::{MenuTree, NodeId};
use crate::ui::primitives::text::ColoredText;
use crate::ui::Console;

/// Label of the entry listed after the last child
pub const BACK_LABEL: &str = "Back";

/// Header line printed above every menu
pub const PATH_HEADER: &str = "You are in the menu path: ";

/// Print the header and numbered entries of the menu `id`
pub(crate) fn render_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tree: &MenuTree,
    id: NodeId,
) -> io::Result<()> {
    console.blank()?;
    console.print_parts(&[
        ColoredText::plain(PATH_HEADER).bold(),
        ColoredText::info(tree.full_path(id)).bold(),
        ColoredText::plain(".").bold(),
    ])?;

    let mut count = 0;
    for (index, (_, child)) in tree.children(id).enumerate() {
        console.print(&ColoredText::plain(format!("{}. {}", index + 1, child.name())))?;
        count += 1;
    }
    console.print(&ColoredText::dim(format!("{}. {}", count + 1, BACK_LABEL)))
}
