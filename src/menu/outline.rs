//! Read-only snapshot of a menu tree for non-interactive listing.

use serde::Serialize;

use super::node::NodeId;
use super::tree::MenuTree;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::{tree_glyphs, tree_glyphs_ascii};

/// What a menu does when selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuKind {
    Menu,
    Action,
    Dynamic,
}

/// Serializable view of one menu and everything below it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuOutline {
    pub name: String,
    pub kind: MenuKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuOutline>,
}

impl MenuOutline {
    pub fn from_tree(tree: &MenuTree) -> Self {
        Self::from_node(tree, tree.root())
    }

    fn from_node(tree: &MenuTree, id: NodeId) -> Self {
        let node = tree.node(id);
        let kind = if node.is_dynamic() {
            MenuKind::Dynamic
        } else if node.is_leaf() {
            MenuKind::Action
        } else {
            MenuKind::Menu
        };

        Self {
            name: node.name().to_string(),
            kind,
            children: tree
                .children(id)
                .map(|(child, _)| Self::from_node(tree, child))
                .collect(),
        }
    }

    /// Number of leaves that run an action
    pub fn action_count(&self) -> usize {
        match self.kind {
            MenuKind::Menu => self.children.iter().map(Self::action_count).sum(),
            MenuKind::Action | MenuKind::Dynamic => 1,
        }
    }

    /// Render as an indented tree, one menu per line
    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        out.push_str(&ColoredText::plain(&self.name).bold().render(supports_color));
        out.push('\n');
        self.render_children("", supports_color, supports_unicode, &mut out);
        out
    }

    fn render_children(
        &self,
        prefix: &str,
        supports_color: bool,
        supports_unicode: bool,
        out: &mut String,
    ) {
        let (branch, last, pipe, space) = if supports_unicode {
            (
                tree_glyphs::BRANCH,
                tree_glyphs::LAST,
                tree_glyphs::PIPE,
                tree_glyphs::SPACE,
            )
        } else {
            (
                tree_glyphs_ascii::BRANCH,
                tree_glyphs_ascii::LAST,
                tree_glyphs_ascii::PIPE,
                tree_glyphs_ascii::SPACE,
            )
        };

        for (i, child) in self.children.iter().enumerate() {
            let is_last = i + 1 == self.children.len();
            let connector = if is_last { last } else { branch };

            let label = match child.kind {
                MenuKind::Menu => ColoredText::info(&child.name).render(supports_color),
                MenuKind::Action => child.name.clone(),
                MenuKind::Dynamic => format!(
                    "{} {}",
                    child.name,
                    ColoredText::dim("(per-target)").render(supports_color)
                ),
            };
            out.push_str(prefix);
            out.push_str(connector);
            out.push_str(&label);
            out.push('\n');

            let nested = format!("{}{}", prefix, if is_last { space } else { pipe });
            child.render_children(&nested, supports_color, supports_unicode, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Action, DynamicAction};
    use std::rc::Rc;

    fn sample_tree() -> MenuTree {
        let mut tree = MenuTree::default();
        tree.set_action(&["cluster", "maintenance-mode", "enter"], Action::fixed(|| Ok(())))
            .unwrap();
        tree.set_action(&["cluster", "refresh"], Action::fixed(|| Ok(())))
            .unwrap();
        let power_off: DynamicAction = Rc::new(|_: &str| -> anyhow::Result<()> { Ok(()) });
        tree.add_dynamic_siblings(&["node", "power-off"], &["node1", "node2"], power_off)
            .unwrap();
        tree
    }

    #[test]
    fn outline_mirrors_tree_shape() {
        let outline = MenuOutline::from_tree(&sample_tree());
        assert_eq!(outline.name, "Main");
        assert_eq!(outline.kind, MenuKind::Menu);
        assert_eq!(outline.children.len(), 2);
        assert_eq!(outline.children[1].children[0].children[1].name, "node2");
        assert_eq!(
            outline.children[1].children[0].children[1].kind,
            MenuKind::Dynamic
        );
        assert_eq!(outline.action_count(), 4);
    }

    #[test]
    fn outline_renders_unicode_tree() {
        let rendered = MenuOutline::from_tree(&sample_tree()).render(false, true);
        insta::assert_snapshot!(rendered, @r"
        Main
        ├─ cluster
        │  ├─ maintenance-mode
        │  │  └─ enter
        │  └─ refresh
        └─ node
           └─ power-off
              ├─ node1 (per-target)
              └─ node2 (per-target)
        ");
    }

    #[test]
    fn outline_renders_ascii_tree() {
        let rendered = MenuOutline::from_tree(&sample_tree()).render(false, false);
        assert!(rendered.contains("|- cluster\n"));
        assert!(rendered.contains("`- node\n"));
        assert!(!rendered.contains('├'));
    }

    #[test]
    fn outline_serializes_kinds_in_lowercase() {
        let json = serde_json::to_value(MenuOutline::from_tree(&sample_tree())).unwrap();
        assert_eq!(json["name"], "Main");
        assert_eq!(json["kind"], "menu");
        assert_eq!(json["children"][0]["children"][1]["kind"], "action");
        assert!(json["children"][0]["children"][1].get("children").is_none());
    }
}
