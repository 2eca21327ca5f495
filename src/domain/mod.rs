//! Domain layer: the branch network and its algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod error;
pub mod generator;
pub mod resolver;

pub use arena::{BranchNode, Forest, ForestIterator, Level, NodeId, MAX_DEPTH, VACANT};
pub use builder::{BranchRange, ForestBuilder};
pub use error::{DomainError, DomainResult};
pub use generator::{BranchDraw, Lcg, DEFAULT_SEED};
pub use resolver::{neighbor_count, neighbors_of, resolve};
