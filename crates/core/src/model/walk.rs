//! Pre-order traversal over the immutable forest.

use super::{NavNode, NavTree};

/// Lazy pre-order walk yielding `(depth, node)` pairs.
///
/// The walk is stateless with respect to the tree: calling `walk()` again
/// restarts from the beginning. Cross-reference nodes are yielded like
/// leaves; following them is the registry's job.
pub struct Walk<'a> {
    stack: Vec<(usize, &'a NavNode)>,
}

impl<'a> Walk<'a> {
    pub(crate) fn over(roots: &'a [NavNode]) -> Self {
        // Reversed so the leftmost root is popped first.
        let stack = roots.iter().rev().map(|node| (0, node)).collect();
        Self { stack }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a NavNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        for child in node.children().iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

impl NavTree {
    /// Pre-order walk of the whole forest, roots at depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk::over(self.roots())
    }

    /// First pre-order node carrying `label`. No match is `None`, not an
    /// error.
    pub fn find_by_label(&self, label: &str) -> Option<&NavNode> {
        self.walk().map(|(_, node)| node).find(|n| n.label() == label)
    }
}

impl NavNode {
    /// Pre-order walk of this subtree, starting at depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk::over(std::slice::from_ref(self))
    }

    pub fn find_by_label(&self, label: &str) -> Option<&NavNode> {
        self.walk().map(|(_, node)| node).find(|n| n.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> NavTree {
        NavTree::new(vec![
            NavNode::group(
                "A",
                Some("a.html".to_string()),
                vec![
                    NavNode::leaf("B", None),
                    NavNode::group("C", None, vec![NavNode::leaf("D", Some("d.html".to_string()))]),
                ],
            ),
            NavNode::cross_ref("E", None, "extra"),
        ])
    }

    fn labels(tree: &NavTree) -> Vec<(usize, String)> {
        tree.walk()
            .map(|(depth, node)| (depth, node.label().to_string()))
            .collect()
    }

    #[test]
    fn test_walk_is_preorder_and_complete() {
        let tree = forest();
        assert_eq!(
            labels(&tree),
            vec![
                (0, "A".to_string()),
                (1, "B".to_string()),
                (1, "C".to_string()),
                (2, "D".to_string()),
                (0, "E".to_string()),
            ]
        );
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn test_walk_restarts_from_scratch() {
        let tree = forest();
        assert_eq!(labels(&tree), labels(&tree));
    }

    #[test]
    fn test_walk_does_not_follow_cross_refs() {
        let tree = forest();
        // "E" references another tree; its contents never appear here.
        assert_eq!(tree.walk().filter(|(d, _)| *d == 0).count(), 2);
    }

    #[test]
    fn test_find_by_label_first_preorder_match() {
        let tree = NavTree::new(vec![
            NavNode::group(
                "dup",
                Some("first.html".to_string()),
                vec![NavNode::leaf("dup", Some("second.html".to_string()))],
            ),
            NavNode::leaf("dup", Some("third.html".to_string())),
        ]);
        let found = tree.find_by_label("dup").unwrap();
        assert_eq!(found.link(), Some("first.html"));
    }

    #[test]
    fn test_find_by_label_missing_is_none() {
        assert!(forest().find_by_label("nope").is_none());
    }

    #[test]
    fn test_node_walk() {
        let tree = forest();
        let node = tree.find_by_label("C").unwrap();
        let seq: Vec<_> = node.walk().map(|(d, n)| (d, n.label().to_string())).collect();
        assert_eq!(seq, vec![(0, "C".to_string()), (1, "D".to_string())]);
        assert_eq!(node.find_by_label("D").unwrap().link(), Some("d.html"));
    }

    #[test]
    fn test_empty_tree_walks_nothing() {
        let tree = NavTree::default();
        assert_eq!(tree.walk().count(), 0);
        assert!(tree.is_empty());
    }
}
