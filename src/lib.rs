pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod display;
pub mod domain;
pub mod drag;
pub mod editor;
pub mod http;
pub mod pitch;
pub mod roster;
pub mod services;
pub mod store;

use std::io;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use log::{info, warn};

use crate::cli::{Cli, Command, SquadsCommand};
use crate::config::settings::AppConfig;
use crate::config::{formations_for, get_formations};
use crate::domain::{Ruleset, SquadId};
use crate::drag::FrameQueue;
use crate::editor::{EditorEvent, EditorSession};
use crate::services::server::ServerService;
use crate::store::{Persistence, SquadStore};

type CliSession = EditorSession<FrameQueue, Vec<EditorEvent>>;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn new_session(config: &AppConfig, seed: Option<u64>) -> CliSession {
    let settings = config.editor.clone();
    match seed {
        Some(seed) => EditorSession::with_seed(settings, FrameQueue::new(), Vec::new(), seed),
        None => EditorSession::new(settings, FrameQueue::new(), Vec::new()),
    }
}

/// Point the session at the requested formation, or the ruleset default.
fn prepare_formation(
    session: &mut CliSession,
    formation: Option<&str>,
    ruleset: Ruleset,
) -> Result<()> {
    match formation {
        Some(name) => {
            session.change_formation_by_name(name)?;
            if session.ruleset() != ruleset {
                warn!(
                    "Formation {} is a {} formation, ignoring --ruleset {}",
                    name,
                    session.ruleset(),
                    ruleset
                );
            }
        }
        None => session.switch_ruleset(ruleset),
    }
    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn handle_serve(port: Option<u16>, token: Option<String>) -> Result<()> {
    let config = AppConfig::new();
    let port = port.unwrap_or(config.server.port);
    let token = token
        .or(config.server.token.clone())
        .context("A server token is required: pass --token or set SQUAD_SERVER_TOKEN")?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, &config.storage.database_path, &token);
        service.run().await
    })
}

pub fn handle_classify(x: f64, y: f64, ruleset: Ruleset) -> Result<()> {
    let code = pitch::classify(x, y, ruleset);
    println!("{} ({})", code, code.group().as_str());
    Ok(())
}

pub fn handle_formations(ruleset: Option<Ruleset>) -> Result<()> {
    let formations: Vec<_> = match ruleset {
        Some(ruleset) => formations_for(ruleset).collect(),
        None => get_formations().to_vec(),
    };
    for formation in formations {
        println!("{}", display::format_formation(formation));
    }
    Ok(())
}

pub fn handle_lineup(formation: Option<&str>, ruleset: Ruleset, seed: Option<u64>) -> Result<()> {
    let config = AppConfig::new();
    let mut session = new_session(&config, seed);
    prepare_formation(&mut session, formation, ruleset)?;

    println!("{} ({})", session.formation().name, session.ruleset());
    print_lines(display::format_roster(session.entries()));
    Ok(())
}

pub fn handle_randomize(
    teams: usize,
    per_team: usize,
    formation: Option<&str>,
    ruleset: Ruleset,
    seed: Option<u64>,
    save: bool,
) -> Result<()> {
    let config = AppConfig::new();
    let mut session = new_session(&config, seed);
    prepare_formation(&mut session, formation, ruleset)?;
    session.randomize_teams(teams, per_team)?;

    let records = session.team_records();
    for record in &records {
        println!("{}", record.name);
        print_lines(display::format_roster(&record.players));
    }

    if !save {
        return Ok(());
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let store = Persistence::from_config(&config)?;
        for record in &records {
            let saved = store
                .save(record)
                .await
                .with_context(|| format!("Failed to save {}", record.name))?;
            info!("Saved team {} as squad {:?}", saved.name, saved.id);
            println!("Saved {} as #{}", saved.name, saved.id.unwrap_or_default());
        }
        Ok(())
    })
}

pub fn handle_squads(action: &SquadsCommand) -> Result<()> {
    let config = AppConfig::new();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let store = Persistence::from_config(&config)?;
        match action {
            SquadsCommand::List => list_squads(&store).await,
            SquadsCommand::Show { id } => show_squad(&store, &config, *id).await,
            SquadsCommand::Delete { id } => {
                store.delete(*id).await?;
                println!("Deleted squad #{}", id);
                Ok(())
            }
        }
    })
}

async fn list_squads(store: &Persistence) -> Result<()> {
    let squads = store.list().await?;
    if squads.is_empty() {
        println!("No saved squads");
    }
    for squad in &squads {
        println!("{}", display::format_squad_summary(squad));
    }
    Ok(())
}

async fn show_squad(store: &Persistence, config: &AppConfig, id: SquadId) -> Result<()> {
    let record = store.get(id).await?;
    let mut session = new_session(config, None);
    session.load_record(&record)?;

    println!("{}", display::format_squad_summary(&record));
    println!("{} ({})", session.formation().name, session.ruleset());
    print_lines(display::format_roster(session.entries()));
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
