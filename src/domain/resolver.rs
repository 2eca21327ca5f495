//! Name resolution across the forest and neighbour counting.

use tracing::{debug, instrument};

use crate::domain::arena::{Forest, NodeId};
use crate::domain::error::{DomainError, DomainResult};

/// First node labelled `name`, scanning trees in forest order.
#[instrument(level = "debug", skip(forest))]
pub fn resolve(forest: &Forest, name: &str) -> DomainResult<NodeId> {
    forest
        .roots()
        .iter()
        .find_map(|&root| forest.find_by_label(root, name))
        .ok_or_else(|| DomainError::NotFound {
            name: name.to_string(),
        })
}

/// Occupied nodes sharing the great branch of `node`, excluding `node` itself.
///
/// Exactly one is subtracted even when `node` is vacant, so the result can
/// be negative.
#[instrument(level = "debug", skip(forest))]
pub fn neighbor_count(forest: &Forest, node: NodeId, name: &str) -> DomainResult<i64> {
    let top = forest
        .top_level_ancestor(node)
        .ok_or_else(|| DomainError::NoEnclosingBranch {
            name: name.to_string(),
        })?;
    let total = forest.count_labeled_descendants(top) as i64;
    debug!(total, "occupants on great branch");
    Ok(total - 1)
}

/// Resolve `name` and count its neighbours in one step.
pub fn neighbors_of(forest: &Forest, name: &str) -> DomainResult<(NodeId, i64)> {
    let node = resolve(forest, name)?;
    let count = neighbor_count(forest, node, name)?;
    Ok((node, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_unassigned_name_when_resolving_then_not_found_keeps_query() {
        let mut forest = Forest::new();
        let root = forest.add_root();
        forest.add_child(root).unwrap();
        assert_eq!(
            resolve(&forest, "Legolas"),
            Err(DomainError::NotFound {
                name: "Legolas".into()
            })
        );
    }

    #[test]
    fn given_empty_query_when_resolving_then_unlabelled_root_matches_and_has_no_branch() {
        let mut forest = Forest::new();
        let root = forest.add_root();
        assert_eq!(resolve(&forest, ""), Ok(root));
        assert_eq!(
            neighbors_of(&forest, ""),
            Err(DomainError::NoEnclosingBranch { name: String::new() })
        );
    }

    #[test]
    fn given_vacant_match_when_counting_then_still_subtracts_one() {
        let mut forest = Forest::new();
        let root = forest.add_root();
        let large = forest.add_child(root).unwrap();
        forest.set_label(large, "None").unwrap();
        assert_eq!(neighbors_of(&forest, "None"), Ok((large, -1)));
    }
}
