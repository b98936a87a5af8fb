use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One language's catalog, or a subtree of it.
///
/// Keys keep the order they were read in, so a load/save cycle does not
/// reshuffle a hand-maintained file.
pub type Tree = IndexMap<String, Value>;

/// A catalog value.
///
/// Only `Leaf` is a translation unit. `List` and `Node` are containers whose
/// children are values themselves. `Literal` carries JSON numbers, booleans
/// and null through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Leaf(String),
    List(Vec<Value>),
    Node(Tree),
    Literal(serde_json::Value),
}

impl Value {
    pub fn leaf(text: impl Into<String>) -> Self {
        Value::Leaf(text.into())
    }

    pub fn as_node(&self) -> Option<&Tree> {
        match self {
            Value::Node(tree) => Some(tree),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Leaf(text.to_string())
    }
}

impl From<Tree> for Value {
    fn from(tree: Tree) -> Self {
        Value::Node(tree)
    }
}
