use super::{Tree, Value};
use std::collections::BTreeSet;

/// Dot-joined address of one terminal value inside a [`Tree`].
pub type KeyPath = String;

/// Collect the key-path of every terminal value reachable through `Node`
/// nesting.
///
/// `Leaf`, `List` and `Literal` values are terminal: a list is one opaque
/// path and its elements are never addressed individually. Empty nodes
/// contribute no paths. The returned set iterates in lexicographic order.
pub fn flatten(tree: &Tree) -> BTreeSet<KeyPath> {
    let mut keys = BTreeSet::new();
    collect(tree, None, &mut keys);
    keys
}

fn collect(tree: &Tree, prefix: Option<&str>, keys: &mut BTreeSet<KeyPath>) {
    for (key, value) in tree {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };

        match value {
            Value::Node(child) => collect(child, Some(&path), keys),
            Value::Leaf(_) | Value::List(_) | Value::Literal(_) => {
                keys.insert(path);
            }
        }
    }
}
