use termtree::Tree;
use tracing::instrument;

use crate::domain::{Forest, NodeId};

/// Conversion of branch structures into printable `termtree` trees.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Vec<Tree<String>>;
}

impl TreeNodeConvert for Forest {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Vec<Tree<String>> {
        fn build_tree(forest: &Forest, node_idx: NodeId) -> Tree<String> {
            let leaves: Vec<_> = forest
                .node(node_idx)
                .map(|node| {
                    node.children()
                        .iter()
                        .map(|&child| build_tree(forest, child))
                        .collect()
                })
                .unwrap_or_default();
            Tree::new(node_caption(forest, node_idx)).with_leaves(leaves)
        }

        self.roots()
            .iter()
            .map(|&root| build_tree(self, root))
            .collect()
    }
}

/// Level plus occupant, e.g. `great branch: Elrond`.
pub fn node_caption(forest: &Forest, id: NodeId) -> String {
    let level = forest
        .level_of(id)
        .map(|l| l.to_string())
        .unwrap_or_else(|| "branch".to_string());
    match forest.node(id) {
        Some(node) if node.is_occupied() => {
            format!("{}: {}", level, node.label().unwrap_or_default())
        }
        Some(node) if node.label().is_some() => format!("{} (empty)", level),
        _ => level,
    }
}
