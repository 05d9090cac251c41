//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod cast;
mod demo;
mod spell;

use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, CovenConfig};
use crate::logging::{init_logging, LogSettings};
use crate::parser::{parse_stream, ParseResult};
use crate::witch::{MagicalBeing, Witch};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Coven - witches, familiars, and the presto chango spell
#[derive(Parser)]
#[command(name = "coven")]
#[command(about = "Coven - turn familiars into toads, provided the hat is on")]
#[command(version)]
pub struct Cli {
    /// Path to coven.toml (default: search upwards, then the XDG config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print plain text without avatars
    #[arg(long, global = true)]
    pub no_avatars: bool,

    /// Log filter directive, replacing the one from coven.toml (e.g. `coven=info`)
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cast presto chango for every witch in a coven file
    Cast {
        /// Coven file with one witch per JSON5 object
        input: PathBuf,

        /// Only cast for the witch with this name
        #[arg(short, long)]
        witch: Option<String>,

        /// Strict mode: skipped witches are errors
        #[arg(long)]
        strict: bool,

        /// Output one JSON object per witch
        #[arg(long)]
        json: bool,
    },
    /// Let every familiar in a coven file speak
    Speak {
        /// Coven file with one witch per JSON5 object
        input: PathBuf,
    },
    /// Check whether some words are a known incantation
    Spell {
        /// The words, e.g. `coven spell hocus pocus`
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// List every known incantation
    Spells,
    /// Sabrina tries to turn Salem into a toad
    Demo,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let strict_flag = matches!(cli.command, Commands::Cast { strict: true, .. });
    let overrides = CliOverrides {
        avatars: cli.no_avatars.then_some(false),
        strict: strict_flag.then_some(true),
        log_filter: cli.log_filter.clone(),
    };
    merge_cli_overrides(&mut config, &overrides);
    let errors = config.validate();
    if !errors.is_empty() {
        for error in errors {
            eprintln!("Error: {}", error);
        }
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    init_logging(LogSettings { filter: &config.log.filter, verbose: cli.verbose });

    dispatch(cli.command, &config)
}

fn dispatch(command: Commands, config: &CovenConfig) -> ExitCode {
    match command {
        Commands::Cast { input, witch, json, .. } => {
            cast::run_cast(&input, witch.as_deref(), json, config)
        }
        Commands::Speak { input } => cast::run_speak(&input),
        Commands::Spell { words } => spell::run_spell(&words.join(" "), config.display.avatars),
        Commands::Spells => spell::run_spells(config.display.avatars),
        Commands::Demo => demo::run_demo(),
    }
}

/// Read and parse a coven file, reporting open failures on stderr.
pub(crate) fn read_coven(input: &Path) -> Result<ParseResult, ExitCode> {
    let file = match File::open(input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: Cannot open input file '{}': {}", input.display(), e);
            return Err(ExitCode::from(EXIT_ERROR));
        }
    };
    Ok(parse_stream(file))
}

/// Name used for a witch in output.
pub(crate) fn witch_label(witch: &Witch) -> &str {
    witch.name().unwrap_or("unnamed witch")
}
