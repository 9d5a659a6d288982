//! MenuTree builder.
//!
//! Nodes live in a flat table owned by the tree; parents are referenced by
//! [`NodeId`], so the ownership graph has no cycles. The tree only grows:
//! there is no removal API and it is treated as read-only once navigation
//! starts.

use tracing::trace;

use super::action::{Action, DynamicAction};
use super::node::{MenuNode, NodeId};
use crate::error::{MenuError, MenuResult};

/// Separator used by [`MenuTree::full_path`]
pub const PATH_SEPARATOR: &str = " > ";

/// A hierarchy of menus rooted at a single, action-less root
#[derive(Debug)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
}

impl Default for MenuTree {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROOT)
    }
}

impl MenuTree {
    pub const DEFAULT_ROOT: &'static str = "Main";

    /// Create a tree containing only a root menu called `root_name`
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![MenuNode::new(root_name)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Borrow a node.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this tree.
    pub fn node(&self, id: NodeId) -> &MenuNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&MenuNode> {
        self.nodes.get(id.0)
    }

    /// Number of menus in the tree, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Children of `id` in display order
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &MenuNode)> + '_ {
        self.node(id)
            .children()
            .iter()
            .map(move |&child| (child, self.node(child)))
    }

    /// First child of `parent` whose name matches exactly
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .find(|(_, node)| node.name() == name)
            .map(|(id, _)| id)
    }

    /// Locate an existing node by path without creating anything
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<NodeId> {
        path.iter()
            .try_fold(self.root(), |current, name| {
                self.find_child(current, name.as_ref())
            })
    }

    /// Attach `node` as the last child of `parent`.
    ///
    /// Fails if `parent` is a leaf: a menu with an action cannot also list
    /// submenus.
    pub fn add_child(&mut self, parent: NodeId, mut node: MenuNode) -> MenuResult<NodeId> {
        if self.node(parent).is_leaf() {
            return Err(MenuError::has_action(self.full_path(parent)));
        }

        let id = NodeId(self.nodes.len());
        node.attach(parent);
        trace!(parent = parent.index(), child = node.name(), "attach menu");
        self.nodes.push(node);
        self.nodes[parent.0].push_child(id);
        Ok(id)
    }

    /// Names from the root down to `id`, both included
    pub fn path_names(&self, id: NodeId) -> Vec<&str> {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(at) = current {
            let node = self.node(at);
            names.push(node.name());
            current = node.parent();
        }
        names.reverse();
        names
    }

    /// Display path such as `Main > cluster > refresh`
    pub fn full_path(&self, id: NodeId) -> String {
        self.path_names(id).join(PATH_SEPARATOR)
    }

    /// Walk `path` from the root, reusing matching children and creating
    /// missing ones. Calling it twice with the same path returns the same node.
    pub fn ensure_path<S: AsRef<str>>(&mut self, path: &[S]) -> MenuResult<NodeId> {
        let mut current = self.root();
        for name in path {
            let name = name.as_ref();
            current = match self.find_child(current, name) {
                Some(existing) => existing,
                None => self.add_child(current, MenuNode::new(name))?,
            };
        }
        Ok(current)
    }

    /// Bind `action` to the menu at `path`, creating the path as needed.
    ///
    /// `Action::None` only ensures the path exists. Binding an action to a
    /// menu that already has submenus, or to the root, is a structure error.
    pub fn set_action<S: AsRef<str>>(&mut self, path: &[S], action: Action) -> MenuResult<NodeId> {
        let id = self.ensure_path(path)?;
        if action.is_none() {
            return Ok(id);
        }
        if id == self.root() {
            return Err(MenuError::RootAction);
        }
        if !self.node(id).children().is_empty() {
            return Err(MenuError::has_children(self.full_path(id)));
        }

        self.nodes[id.0].set_action(action);
        Ok(id)
    }

    /// Append one dynamic leaf per entry in `names` under the menu at `path`.
    ///
    /// Every leaf shares the same `action`; each one calls it with its own
    /// name. Existing children are left untouched, so repeating the call adds
    /// another set of leaves.
    pub fn add_dynamic_siblings<S, N>(
        &mut self,
        path: &[S],
        names: &[N],
        action: DynamicAction,
    ) -> MenuResult<Vec<NodeId>>
    where
        S: AsRef<str>,
        N: AsRef<str>,
    {
        let parent = self.ensure_path(path)?;
        names
            .iter()
            .map(|name| {
                let leaf = MenuNode::leaf(name.as_ref(), Action::Dynamic(action.clone()));
                self.add_child(parent, leaf)
            })
            .collect()
    }
}
