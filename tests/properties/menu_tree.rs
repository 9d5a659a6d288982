//! Property tests for menu tree construction.

use std::rc::Rc;

use proptest::prelude::*;

use magnascale::menu::{Action, DynamicAction, MenuTree};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,8}").unwrap()
}

fn path() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 1..=4)
}

/// Every node is exactly one of: an action leaf, or a menu (possibly empty).
fn assert_exclusive(tree: &MenuTree) -> Result<(), TestCaseError> {
    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        prop_assert!(!(node.action().is_some() && !node.children().is_empty()));
        stack.extend(node.children().iter().copied());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: ensuring the same path twice returns the same node and adds nothing.
    #[test]
    fn property_ensure_path_is_idempotent(p in path()) {
        let mut tree = MenuTree::default();
        let first = tree.ensure_path(&p[..]).unwrap();
        let count = tree.node_count();
        let second = tree.ensure_path(&p[..]).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(tree.node_count(), count);
        prop_assert_eq!(tree.find(&p[..]), Some(first));
    }

    /// PROPERTY: no sequence of mutations produces a node with both an action and children.
    #[test]
    fn property_action_and_children_are_exclusive(
        ops in proptest::collection::vec((path(), any::<bool>()), 0..=12)
    ) {
        let mut tree = MenuTree::default();
        for (p, bind) in &ops {
            let before = tree.node_count();
            let action = if *bind { Action::fixed(|| Ok(())) } else { Action::None };
            match tree.set_action(&p[..], action) {
                Ok(_) => {}
                Err(e) => {
                    prop_assert!(e.is_structure_error());
                    prop_assert_eq!(tree.node_count(), before);
                }
            }
        }
        assert_exclusive(&tree)?;
    }

    /// PROPERTY: the displayed path joins the root name and every segment.
    #[test]
    fn property_full_path_lists_every_segment(p in path()) {
        let mut tree = MenuTree::new("Root");
        let id = tree.ensure_path(&p[..]).unwrap();

        let expected = std::iter::once("Root".to_string())
            .chain(p.iter().cloned())
            .collect::<Vec<_>>()
            .join(" > ");
        prop_assert_eq!(tree.full_path(id), expected);
    }

    /// PROPERTY: a dynamic group adds one leaf per name, all sharing one action.
    #[test]
    fn property_dynamic_group_adds_one_leaf_per_name(
        p in path(),
        names in proptest::collection::vec(segment(), 0..=6),
    ) {
        let mut tree = MenuTree::default();
        let action: DynamicAction = Rc::new(|_: &str| -> anyhow::Result<()> { Ok(()) });
        let ids = tree.add_dynamic_siblings(&p[..], &names[..], Rc::clone(&action)).unwrap();

        prop_assert_eq!(ids.len(), names.len());
        prop_assert_eq!(Rc::strong_count(&action), names.len() + 1);

        let parent = tree.find(&p[..]).unwrap();
        let listed: Vec<&str> = tree.children(parent).map(|(_, n)| n.name()).collect();
        prop_assert_eq!(listed, names.iter().map(String::as_str).collect::<Vec<_>>());
        for id in ids {
            prop_assert!(tree.node(id).is_dynamic());
        }
    }
}
