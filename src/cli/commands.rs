//! Command dispatch: wires settings, services and roster sources together.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::services::{NeighborOutcome, VillageService};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{BranchDraw, DomainResult, Forest, Lcg};
use crate::infrastructure::{assign_from_stream, read_roster_file, InfraError, PromptingSource};
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Search { name, roster }) => _search(cli, name, roster.as_ref()),
        Some(Commands::Tree { roster }) => _tree(cli, roster.as_ref()),
        Some(Commands::Draws { bound, count }) => _draws(cli, *bound, *count),
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?.with_overrides(cli.seed, cli.trees);
    settings.validate()?;
    debug!("settings: {:?}", settings);
    Ok(settings)
}

/// Seat names from a roster file, or from stdin (prompting on a terminal).
fn seat_village(
    service: &VillageService,
    forest: &mut Forest,
    roster: Option<&PathBuf>,
) -> CliResult<()> {
    let summary = match roster {
        Some(path) => {
            let mut source = read_roster_file(path)?;
            service.assign(forest, &mut source)?
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            if interactive {
                output::info("Add elf in village:");
            }
            let mut source = PromptingSource::new(stdin.lock(), io::stdout(), interactive);
            assign_from_stream(service, forest, &mut source)?
        }
    };
    debug!(
        seats = summary.seats,
        occupied = summary.occupied,
        "roster seated"
    );
    if summary.unused > 0 {
        output::warning(&format!("{} roster names were not seated", summary.unused));
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _search(cli: &Cli, name: &str, roster: Option<&PathBuf>) -> CliResult<()> {
    let service = VillageService::new(load_settings(cli)?);
    let mut forest = service.settle()?;
    seat_village(&service, &mut forest, roster)?;

    match service.neighbors(&forest, name)? {
        NeighborOutcome::Found {
            name, neighbors, ..
        } => output::info(&format!("Elf '{}' have {} neighbours.", name, neighbors)),
        NeighborOutcome::NotFound { name } => {
            output::info(&format!("Elf '{}' not found.", name))
        }
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _tree(cli: &Cli, roster: Option<&PathBuf>) -> CliResult<()> {
    let service = VillageService::new(load_settings(cli)?);
    let mut forest = service.settle()?;
    if roster.is_some() {
        seat_village(&service, &mut forest, roster)?;
    }

    let trees = forest.to_tree_string();
    output::header(&format!(
        "Found {} trees (seed {}):",
        trees.len(),
        service.settings().seed
    ));
    for tree in trees {
        output::info(&tree);
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _draws(cli: &Cli, bound: u32, count: usize) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let draws = draw_stream(&mut Lcg::new(settings.seed), bound, count)?;
    output::info(&draws.iter().join("\n"));
    Ok(())
}

fn draw_stream(draw: &mut impl BranchDraw, bound: u32, count: usize) -> DomainResult<Vec<u32>> {
    (0..count).map(|_| draw.next(bound)).collect()
}

fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => {
                    let state = if path.exists() { "" } else { " (not found)" };
                    output::info(&format!("global: {}{}", path.display(), state));
                }
                None => output::info("global: (no config directory)"),
            }
            if let Some(local) = &cli.config {
                output::info(&format!("local:  {}", local.display()));
            }
        }
        ConfigCommands::Init { force } => {
            let path = cli
                .config
                .clone()
                .or_else(global_config_path)
                .ok_or_else(|| CliError::InvalidArgs("no config directory available".into()))?;
            if path.exists() && !force {
                return Err(CliError::InvalidArgs(format!(
                    "config already exists: {} (use --force)",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
            }
            std::fs::write(&path, Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("Created {}", path.display()));
        }
    }
    Ok(())
}
