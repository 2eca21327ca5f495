//! Forest builder: grows fixed-depth trees with drawn branching factors.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

use crate::domain::arena::Forest;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::generator::BranchDraw;

/// Inclusive range of children to draw for one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRange {
    pub min: u32,
    pub max: u32,
}

impl BranchRange {
    pub fn new(min: u32, max: u32) -> DomainResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.min > self.max {
            return Err(DomainError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn contains(&self, n: usize) -> bool {
        (self.min as usize..=self.max as usize).contains(&n)
    }
}

impl fmt::Display for BranchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Constructs a forest of root -> great branch -> middle branch trees.
#[derive(Debug, Clone)]
pub struct ForestBuilder {
    trees: usize,
    large: BranchRange,
    middle: BranchRange,
}

impl Default for ForestBuilder {
    fn default() -> Self {
        Self {
            trees: 5,
            large: BranchRange { min: 3, max: 5 },
            middle: BranchRange { min: 2, max: 3 },
        }
    }
}

impl ForestBuilder {
    pub fn new(trees: usize, large: BranchRange, middle: BranchRange) -> Self {
        Self {
            trees,
            large,
            middle,
        }
    }

    /// Build the forest, drawing from `draw` in tree, great branch, middle
    /// branch order. That order is what makes a seed reproducible.
    #[instrument(level = "debug", skip(self, draw))]
    pub fn build(&self, draw: &mut impl BranchDraw) -> DomainResult<Forest> {
        self.large.validate()?;
        self.middle.validate()?;

        let mut forest = Forest::new();
        for tree in 0..self.trees {
            let root = forest.add_root();
            let large_count = draw.next_in(self.large.min, self.large.max)?;
            for _ in 0..large_count {
                let large = forest.add_child(root)?;
                let middle_count = draw.next_in(self.middle.min, self.middle.max)?;
                for _ in 0..middle_count {
                    forest.add_child(large)?;
                }
            }
            debug!(tree, large_count, "grew tree");
        }
        debug!(nodes = forest.len(), "forest built");
        Ok(forest)
    }
}
