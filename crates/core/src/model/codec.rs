//! Wire codec for the nested-array tree encoding.
//!
//! Each node is a 3-element tuple `[label, link-or-null, children]`;
//! `children` is `null` (leaf), an inline array of tuples (group), or a
//! string naming another top-level tree (cross-reference). A tree is a
//! top-level array of tuples.

use serde_json::{Value, json};

use super::{NavNode, NavTree};
use crate::error::{DocnavError, Result};

impl NavTree {
    /// Decode a tree from its wire value. Fails with `MalformedTree` on
    /// any shape violation; nothing is recovered partially.
    pub fn from_value(value: &Value) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| malformed("root", "tree must be an array of nodes"))?;
        let mut roots = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            roots.push(NavNode::from_value_at(item, &format!("[{i}]"))?);
        }
        Ok(NavTree::new(roots))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_value(&serde_json::from_str(text)?)
    }

    /// Re-encode into the wire form. Decoding the result reproduces an
    /// equal tree.
    pub fn to_value(&self) -> Value {
        Value::Array(self.roots().iter().map(NavNode::to_value).collect())
    }

    pub fn to_json_string(&self) -> String {
        self.to_value().to_string()
    }
}

impl NavNode {
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::from_value_at(value, "root")
    }

    fn from_value_at(value: &Value, at: &str) -> Result<Self> {
        let tuple = value
            .as_array()
            .ok_or_else(|| malformed(at, "node must be a 3-element array"))?;
        if tuple.len() != 3 {
            return Err(malformed(
                at,
                &format!("expected 3 elements, got {}", tuple.len()),
            ));
        }

        let label = tuple[0]
            .as_str()
            .ok_or_else(|| malformed(&format!("{at}[0]"), "label must be a string"))?
            .to_string();

        let link = match &tuple[1] {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            _ => return Err(malformed(&format!("{at}[1]"), "link must be a string or null")),
        };

        match &tuple[2] {
            Value::Null => Ok(NavNode::Leaf { label, link }),
            Value::String(tree) => Ok(NavNode::CrossRef {
                label,
                link,
                tree: tree.clone(),
            }),
            Value::Array(items) => {
                let mut children = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    children.push(Self::from_value_at(item, &format!("{at}[2][{i}]"))?);
                }
                Ok(NavNode::Group {
                    label,
                    link,
                    children,
                })
            }
            _ => Err(malformed(
                &format!("{at}[2]"),
                "children must be null, an array, or a tree name",
            )),
        }
    }

    pub fn to_value(&self) -> Value {
        let children = match self {
            NavNode::Leaf { .. } => Value::Null,
            NavNode::Group { children, .. } => {
                Value::Array(children.iter().map(Self::to_value).collect())
            }
            NavNode::CrossRef { tree, .. } => Value::String(tree.clone()),
        };
        json!([self.label(), self.link(), children])
    }
}

fn malformed(at: &str, reason: &str) -> DocnavError {
    DocnavError::MalformedTree {
        at: at.to_string(),
        reason: reason.to_string(),
    }
}
