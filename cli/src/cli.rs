// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::cmd_compare::CmdCompare;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_period::CmdPeriod;
use crate::cmd_shift::CmdShift;
use crate::cmd_today::CmdToday;
use crate::config::{APP_NAME, Config, parse_config};

/// Run the dayspan command-line interface.
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = Cli::parse().and_then(Cli::run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Day-precision dates and closed date periods.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to today
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/dayspan/config.toml on Linux and \
MacOS, %APPDATA%/dayspan/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdToday::command())
            .subcommand(CmdPeriod::command())
            .subcommand(CmdShift::command())
            .subcommand(CmdCompare::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Ok(Self::from(matches))
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Ok(Self::from(matches))
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Self {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdToday::NAME, matches)) => Today(CmdToday::from(matches)),
            Some((CmdPeriod::NAME, matches)) => Period(CmdPeriod::from(matches)),
            Some((CmdShift::NAME, matches)) => Shift(CmdShift::from(matches)),
            Some((CmdCompare::NAME, matches)) => Compare(CmdCompare::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Today(CmdToday),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Cli { config, command }
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the current date
    Today(CmdToday),

    /// Inspect a period between two dates
    Period(CmdPeriod),

    /// Move a date by whole months
    Shift(CmdShift),

    /// Compare two dates
    Compare(CmdCompare),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Today(a)   => Self::run_with(config, |x| a.run(x)),
            Period(a)  => Self::run_with(config, |x| a.run(x)),
            Shift(a)   => Self::run_with(config, |x| a.run(x)),
            Compare(a) => Self::run_with(config, |x| a.run(x)),
            GenerateCompletion(a) => a.run(),
        }
    }

    fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&Config) -> Result<(), Box<dyn Error>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config)?;
        f(&config)
    }
}
