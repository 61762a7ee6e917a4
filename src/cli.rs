use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::{Ruleset, SquadId};

#[derive(Parser, Debug)]
#[command(author, version, about = "Squad formation builder")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the squad store service
    Serve {
        /// Port number (defaults to 3000)
        #[arg(short, long)]
        port: Option<u16>,
        /// Token clients must send (defaults to $SQUAD_SERVER_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },
    /// Print the position code for a pitch location given in percent
    #[command(allow_negative_numbers = true)]
    Classify {
        x: f64,
        y: f64,
        #[arg(short, long, value_enum, default_value_t = Ruleset::Full)]
        ruleset: Ruleset,
    },
    /// List formation templates
    Formations {
        #[arg(short, long, value_enum)]
        ruleset: Option<Ruleset>,
    },
    /// Fill a formation with players and print the lineup
    Lineup {
        /// Formation name, e.g. "4-4-2" (defaults to the ruleset's default)
        #[arg(short, long)]
        formation: Option<String>,
        #[arg(short, long, value_enum, default_value_t = Ruleset::Full)]
        ruleset: Ruleset,
        /// Seed for reproducible names
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Split players into random teams
    Randomize {
        #[arg(short, long)]
        teams: usize,
        #[arg(short = 'n', long)]
        per_team: usize,
        #[arg(short, long)]
        formation: Option<String>,
        #[arg(short, long, value_enum, default_value_t = Ruleset::Full)]
        ruleset: Ruleset,
        #[arg(long)]
        seed: Option<u64>,
        /// Save every team as its own squad
        #[arg(long)]
        save: bool,
    },
    /// Manage saved squads
    Squads {
        #[command(subcommand)]
        action: SquadsCommand,
    },
    /// Print a shell completion script
    Completions { shell: Shell },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SquadsCommand {
    /// List saved squads
    List,
    /// Print one squad
    Show { id: SquadId },
    /// Delete one squad
    Delete { id: SquadId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify_with_negative_coordinates() {
        let cli = Cli::try_parse_from(["squad_builder", "classify", "-5", "10", "-r", "futsal"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Classify {
                x: -5.0,
                y: 10.0,
                ruleset: Ruleset::Reduced,
            }
        );
    }

    #[test]
    fn test_parse_randomize() {
        let cli = Cli::try_parse_from([
            "squad_builder",
            "randomize",
            "--teams",
            "2",
            "--per-team",
            "5",
            "--save",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Randomize {
                teams: 2,
                per_team: 5,
                save: true,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_squads_show() {
        let cli = Cli::try_parse_from(["squad_builder", "squads", "show", "12"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Squads {
                action: SquadsCommand::Show { id: 12 }
            }
        );
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
