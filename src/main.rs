use anyhow::Result;

use squad_builder::cli::Command;
use squad_builder::{
    handle_classify, handle_completions, handle_formations, handle_lineup, handle_randomize,
    handle_serve, handle_squads, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port, token } => handle_serve(*port, token.clone()),
        Command::Classify { x, y, ruleset } => handle_classify(*x, *y, *ruleset),
        Command::Formations { ruleset } => handle_formations(*ruleset),
        Command::Lineup {
            formation,
            ruleset,
            seed,
        } => handle_lineup(formation.as_deref(), *ruleset, *seed),
        Command::Randomize {
            teams,
            per_team,
            formation,
            ruleset,
            seed,
            save,
        } => handle_randomize(
            *teams,
            *per_team,
            formation.as_deref(),
            *ruleset,
            *seed,
            *save,
        ),
        Command::Squads { action } => handle_squads(action),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
