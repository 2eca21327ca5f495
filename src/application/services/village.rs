//! Village service
//!
//! Grows the forest from settings, seats occupants and answers neighbour queries.

use tracing::{debug, instrument, warn};

use crate::application::roster::{NameSource, Seat};
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{self, DomainError, Forest, ForestBuilder, Lcg, Level, NodeId};

/// Result of seating a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterSummary {
    /// Seats filled (great plus middle branches)
    pub seats: usize,
    /// Seats holding a real occupant (not empty, not "None")
    pub occupied: usize,
    /// Names left unused in the source
    pub unused: usize,
}

/// Outcome of a neighbour query. A missing name is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NeighborOutcome {
    Found {
        name: String,
        node: NodeId,
        level: Level,
        neighbors: i64,
    },
    NotFound {
        name: String,
    },
}

/// Service for the elf village use cases.
#[derive(Debug, Clone)]
pub struct VillageService {
    settings: Settings,
}

impl VillageService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build the forest from a fresh generator seeded from settings.
    #[instrument(level = "debug", skip(self))]
    pub fn settle(&self) -> ApplicationResult<Forest> {
        let mut lcg = Lcg::new(self.settings.seed);
        let forest = ForestBuilder::new(
            self.settings.trees,
            self.settings.large_branches,
            self.settings.middle_branches,
        )
        .build(&mut lcg)?;
        debug!(
            seed = self.settings.seed,
            trees = forest.roots().len(),
            "village settled"
        );
        Ok(forest)
    }

    /// Seat names in roster order: per tree, each great branch followed by
    /// its middle branches.
    #[instrument(level = "debug", skip(self, forest, source))]
    pub fn assign(
        &self,
        forest: &mut Forest,
        source: &mut dyn NameSource,
    ) -> ApplicationResult<RosterSummary> {
        let seats = roster_seats(forest);
        let needed = seats.len();
        for (provided, (seat, node)) in seats.into_iter().enumerate() {
            let name = source
                .next_name(seat)
                .ok_or(ApplicationError::RosterExhausted { needed, provided })?;
            forest.set_label(node, &name)?;
        }

        let unused = source.remaining();
        if unused > 0 {
            warn!(unused, "roster has more names than seats");
        }
        let occupied = forest
            .iter()
            .filter(|(_, node)| node.is_occupied())
            .count();
        Ok(RosterSummary {
            seats: needed,
            occupied,
            unused,
        })
    }

    /// Find `name` and count the other occupants on its great branch.
    #[instrument(level = "debug", skip(self, forest))]
    pub fn neighbors(&self, forest: &Forest, name: &str) -> ApplicationResult<NeighborOutcome> {
        match domain::neighbors_of(forest, name) {
            Ok((node, neighbors)) => {
                let level = forest.level_of(node).ok_or(DomainError::UnknownNode)?;
                debug_assert_ne!(level, Level::Root, "resolved node has no enclosing branch");
                Ok(NeighborOutcome::Found {
                    name: name.to_string(),
                    node,
                    level,
                    neighbors,
                })
            }
            Err(DomainError::NotFound { name }) => Ok(NeighborOutcome::NotFound { name }),
            Err(e) => Err(e.into()),
        }
    }
}

fn roster_seats(forest: &Forest) -> Vec<(Seat, NodeId)> {
    let mut seats = Vec::new();
    for (tree, &root) in forest.roots().iter().enumerate() {
        for i in 0..forest.child_count(root) {
            let Some(large) = forest.child_at(root, i) else {
                continue;
            };
            seats.push((Seat { tree, level: Level::Large }, large));
            for j in 0..forest.child_count(large) {
                if let Some(middle) = forest.child_at(large, j) {
                    seats.push((Seat { tree, level: Level::Middle }, middle));
                }
            }
        }
    }
    seats
}
