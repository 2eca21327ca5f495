//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod village;

pub use village::{NeighborOutcome, RosterSummary, VillageService};
