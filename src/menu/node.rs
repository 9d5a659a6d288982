//! MenuNode data structure.

use super::action::Action;

/// Index of a node inside its [`MenuTree`](super::MenuTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single menu: either a submenu with children or a leaf with an action
#[derive(Debug)]
pub struct MenuNode {
    name: String,
    action: Action,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl MenuNode {
    /// Create a submenu with no children yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action: Action::None,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Create a leaf bound to `action`
    pub fn leaf(name: impl Into<String>, action: Action) -> Self {
        Self {
            action,
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn is_dynamic(&self) -> bool {
        self.action.is_dynamic()
    }

    /// A node with an action executes when selected instead of listing children
    pub fn is_leaf(&self) -> bool {
        self.action.is_some()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub(crate) fn set_action(&mut self, action: Action) {
        self.action = action;
    }

    pub(crate) fn attach(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}
