//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on the name-source boundary trait.

pub mod error;
pub mod roster;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use roster::{NameSource, Roster, Seat};
