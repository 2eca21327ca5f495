//! Occupant rosters: where seat names come from.

use std::collections::VecDeque;

use crate::domain::Level;

/// A seat being filled: which tree, and at which level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    /// Zero-based tree index in forest order
    pub tree: usize,
    pub level: Level,
}

/// Supplies one occupant name per seat, in roster order.
pub trait NameSource {
    /// Next name for `seat`, or None when the source is exhausted.
    fn next_name(&mut self, seat: Seat) -> Option<String>;

    /// Names left over after assignment; sources that cannot tell report 0.
    /// Streaming sources may read ahead to count.
    fn remaining(&mut self) -> usize {
        0
    }
}

/// In-memory roster of whitespace-separated names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: VecDeque<String>,
}

impl Roster {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Split `text` on any whitespace, like reading word by word from a stream.
    pub fn parse(text: &str) -> Self {
        Self::new(text.split_whitespace())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameSource for Roster {
    fn next_name(&mut self, _seat: Seat) -> Option<String> {
        self.names.pop_front()
    }

    fn remaining(&mut self) -> usize {
        self.names.len()
    }
}
