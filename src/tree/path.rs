use super::{Tree, Value};

/// Look up the value at a dotted key-path.
///
/// Returns `None` when a segment is missing, or when a non-`Node` value sits
/// where further descent is required.
pub fn get_path<'a>(tree: &'a Tree, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = tree.get(segments.next()?)?;

    for segment in segments {
        match current {
            Value::Node(child) => current = child.get(segment)?,
            _ => return None,
        }
    }

    Some(current)
}

/// Assign `value` at a dotted key-path, creating empty nodes for missing
/// intermediate segments.
///
/// An intermediate segment holding a non-`Node` value is replaced by an
/// empty node. An existing value at the final segment is overwritten in
/// place, keeping its position in the parent's key order.
pub fn set_path(tree: &mut Tree, path: &str, value: Value) {
    let mut segments: Vec<&str> = path.split('.').collect();
    let last = segments.pop().unwrap_or_default();

    let mut current = tree;
    for segment in segments {
        let slot = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Node(Tree::new()));
        current = ensure_node(slot);
    }

    current.insert(last.to_string(), value);
}

fn ensure_node(slot: &mut Value) -> &mut Tree {
    if !matches!(slot, Value::Node(_)) {
        *slot = Value::Node(Tree::new());
    }
    match slot {
        Value::Node(child) => child,
        _ => unreachable!("slot was just replaced with a node"),
    }
}
