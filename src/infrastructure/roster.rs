//! Roster input: whole files, or word-by-word from a (possibly interactive) stream.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use tracing::{debug, instrument};

use crate::application::services::{RosterSummary, VillageService};
use crate::application::{NameSource, Roster, Seat};
use crate::config::expand_path;
use crate::domain::{Forest, Level};
use crate::infrastructure::{InfraError, InfraResult};

/// Read a whitespace-separated roster file.
#[instrument(level = "debug")]
pub fn read_roster_file(path: &Path) -> InfraResult<Roster> {
    let path = expand_path(path);
    let content = std::fs::read_to_string(&path)
        .map_err(|e| InfraError::io(format!("read roster {}", path.display()), e))?;
    let roster = Roster::parse(&content);
    debug!(names = roster.len(), "roster loaded");
    Ok(roster)
}

/// Seat a village from a stream. A read failure wins over any roster
/// shortfall it caused.
#[instrument(level = "debug", skip_all)]
pub fn assign_from_stream<R: BufRead, W: Write>(
    service: &VillageService,
    forest: &mut Forest,
    source: &mut PromptingSource<R, W>,
) -> InfraResult<RosterSummary> {
    let result = service.assign(forest, source);
    if let Some(e) = source.take_error() {
        return Err(InfraError::io("read roster from stdin", e));
    }
    Ok(result?)
}

/// Reads names on demand, prompting before each seat when interactive.
///
/// The first read error ends the stream and is kept for [`take_error`](Self::take_error).
pub struct PromptingSource<R, W> {
    reader: R,
    writer: W,
    interactive: bool,
    pending: VecDeque<String>,
    exhausted: bool,
    failure: Option<io::Error>,
}

impl<R: BufRead, W: Write> PromptingSource<R, W> {
    pub fn new(reader: R, writer: W, interactive: bool) -> Self {
        Self {
            reader,
            writer,
            interactive,
            pending: VecDeque::new(),
            exhausted: false,
            failure: None,
        }
    }

    /// The read error that ended the stream, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.failure.take()
    }

    fn prompt(&mut self, seat: Seat) {
        if !self.interactive {
            return;
        }
        let kind = match seat.level {
            Level::Large => "great",
            _ => "middle",
        };
        let text = format!("Enter name of elf for {} branch (or 'None'):", kind);
        // prompt output is best effort; reading still proceeds
        let _ = write!(self.writer, "{} ", text.cyan());
        let _ = self.writer.flush();
    }

    fn read_line(&mut self) {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => self.exhausted = true,
            Ok(_) => self
                .pending
                .extend(line.split_whitespace().map(str::to_string)),
            Err(e) => {
                self.failure = Some(e);
                self.exhausted = true;
            }
        }
    }

    fn fill(&mut self) {
        while self.pending.is_empty() && !self.exhausted {
            self.read_line();
        }
    }

    fn drain(&mut self) {
        while !self.exhausted {
            self.read_line();
        }
    }
}

impl<R: BufRead, W: Write> NameSource for PromptingSource<R, W> {
    fn next_name(&mut self, seat: Seat) -> Option<String> {
        if self.pending.is_empty() {
            self.prompt(seat);
        }
        self.fill();
        self.pending.pop_front()
    }

    /// Piped input is read to the end so surplus names on later lines are
    /// counted. A terminal is not drained, so only the current line counts.
    fn remaining(&mut self) -> usize {
        if !self.interactive {
            self.drain();
        }
        self.pending.len()
    }
}
