// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, str::FromStr};

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{ArgMatches, Command, arg};
use clap_complete::generate;
use clap_complete_nushell::Nushell;

use crate::Cli;

/// Shells a completion script can be generated for.
const SHELLS: [&str; 6] = ["bash", "elvish", "fish", "nushell", "powershell", "zsh"];

#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        let shells = PossibleValuesParser::new(SHELLS).try_map(|name| name.parse::<Shell>());
        Command::new(Self::NAME)
            .about("Print the dayspan completion script for a shell")
            .hide(true)
            .arg(arg!(shell: <SHELL> "The shell to print the script for").value_parser(shells))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let shell = matches
            .get_one::<Shell>("shell")
            .copied()
            .expect("shell is required");
        Self { shell }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "printing shell completion...");
        self.generate(&mut io::stdout());
        Ok(())
    }

    /// Writes the completion script of the whole `dayspan` command tree into `buf`.
    pub fn generate(self, buf: &mut impl io::Write) {
        let mut cmd = Cli::command();
        let bin = cmd.get_name().to_string();
        match self.shell {
            Shell::Builtin(shell) => generate(shell, &mut cmd, bin, buf),
            Shell::Nushell => generate(Nushell, &mut cmd, bin, buf),
        }
    }
}

/// A shell supported by `clap_complete`, or nushell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Builtin(clap_complete::Shell),
    Nushell,
}

impl FromStr for Shell {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nushell" => Ok(Shell::Nushell),
            _ => s.parse().map(Shell::Builtin),
        }
    }
}
