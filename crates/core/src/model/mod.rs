//! Typed model of the navigation forest.
//!
//! The wire format null-puns a node's third slot (`null` for a leaf, an
//! array for inline children, a string for a cross-tree reference); here
//! the three shapes are explicit variants, so downstream code never
//! pattern-matches on JSON.

mod codec;
mod walk;

pub use walk::Walk;

/// One entry in the navigation forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavNode {
    /// No children. A leaf with no link is a valid inert grouping node.
    Leaf {
        label: String,
        link: Option<String>,
    },
    /// Inline children, in declaration order (which is on-screen order).
    Group {
        label: String,
        link: Option<String>,
        children: Vec<NavNode>,
    },
    /// Children live in a separately named tree, loaded on demand.
    CrossRef {
        label: String,
        link: Option<String>,
        tree: String,
    },
}

impl NavNode {
    pub fn leaf(label: impl Into<String>, link: Option<String>) -> Self {
        NavNode::Leaf {
            label: label.into(),
            link,
        }
    }

    pub fn group(
        label: impl Into<String>,
        link: Option<String>,
        children: Vec<NavNode>,
    ) -> Self {
        NavNode::Group {
            label: label.into(),
            link,
            children,
        }
    }

    pub fn cross_ref(
        label: impl Into<String>,
        link: Option<String>,
        tree: impl Into<String>,
    ) -> Self {
        NavNode::CrossRef {
            label: label.into(),
            link,
            tree: tree.into(),
        }
    }

    /// Display text of the node.
    pub fn label(&self) -> &str {
        match self {
            NavNode::Leaf { label, .. }
            | NavNode::Group { label, .. }
            | NavNode::CrossRef { label, .. } => label,
        }
    }

    /// Anchor target, absent on non-navigable grouping nodes.
    pub fn link(&self) -> Option<&str> {
        match self {
            NavNode::Leaf { link, .. }
            | NavNode::Group { link, .. }
            | NavNode::CrossRef { link, .. } => link.as_deref(),
        }
    }

    /// Inline children; empty for leaves and unresolved cross-references.
    pub fn children(&self) -> &[NavNode] {
        match self {
            NavNode::Group { children, .. } => children,
            _ => &[],
        }
    }

    /// Name of the referenced tree, for cross-reference nodes.
    pub fn referenced_tree(&self) -> Option<&str> {
        match self {
            NavNode::CrossRef { tree, .. } => Some(tree),
            _ => None,
        }
    }
}

/// A named tree as shipped on disk: the top-level array of a generated
/// script file, i.e. an ordered forest. A single-rooted tree is simply a
/// one-element forest.
///
/// Trees are produced once by the generator and never mutated; the model
/// exposes no mutation beyond construction, so a tree can be shared
/// across threads behind an `Arc` without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavTree {
    roots: Vec<NavNode>,
}

impl NavTree {
    pub fn new(roots: Vec<NavNode>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[NavNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of nodes in the whole forest.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }
}
