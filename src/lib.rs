//! Elf village branch network.
//!
//! A forest of fixed-depth trees (tree, great branch, middle branch) grown
//! from a deterministic generator, with occupant search and neighbour
//! counting on the enclosing great branch.
//!
//! Layers, innermost first: [`domain`], [`application`], [`infrastructure`], [`cli`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;

pub use domain::{DomainError, Forest, ForestBuilder, Lcg, NodeId};
