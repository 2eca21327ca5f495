//! Infrastructure layer: roster input from files and terminals

pub mod error;
pub mod roster;

pub use error::{InfraError, InfraResult};
pub use roster::{assign_from_stream, read_roster_file, PromptingSource};
