//! Actions bound to leaf menus.

use std::fmt;
use std::rc::Rc;

/// Zero-argument action for a fixed leaf
pub type StaticAction = Rc<dyn Fn() -> anyhow::Result<()>>;

/// Action that receives the leaf's own name (one implementation, many targets)
pub type DynamicAction = Rc<dyn Fn(&str) -> anyhow::Result<()>>;

/// What happens when a menu is selected.
///
/// `None` marks a submenu; the other two variants mark leaves. A dynamic
/// action is invoked with the name of the menu it is bound to, which lets a
/// group of siblings (e.g. `node1`, `node2`, `node3`) share one operation.
#[derive(Clone, Default)]
pub enum Action {
    #[default]
    None,
    Static(StaticAction),
    Dynamic(DynamicAction),
}

impl Action {
    /// Wrap a closure as a static action
    pub fn fixed<F>(f: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        Action::Static(Rc::new(f))
    }

    /// Wrap a closure as a name-parameterized action
    pub fn per_target<F>(f: F) -> Self
    where
        F: Fn(&str) -> anyhow::Result<()> + 'static,
    {
        Action::Dynamic(Rc::new(f))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }

    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Action::Dynamic(_))
    }

    /// Run the action for the menu called `name`.
    ///
    /// Returns `Ok(())` without doing anything for `Action::None`.
    pub fn invoke(&self, name: &str) -> anyhow::Result<()> {
        match self {
            Action::None => Ok(()),
            Action::Static(f) => f(),
            Action::Dynamic(f) => f(name),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::None => f.write_str("None"),
            Action::Static(_) => f.write_str("Static(..)"),
            Action::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}
