//! Command-line front end for a Swiss-system tournament.
//!
//! Each invocation opens one connection pool, runs a single command against
//! the PostgreSQL-backed tournament store and exits.

mod commands;
mod config;
mod output;

use std::sync::Arc;

use anyhow::{Context, Error};
use ctrlc::set_handler;
use log::info;
use pico_args::Arguments;
use swiss_tournament::{
    db::Database,
    store::PgTournamentStore,
    tournament::TournamentManager,
};

use commands::{Command, parse_command};
use config::CliConfig;

const HELP: &str = "\
Run a Swiss-system tournament

USAGE:
  swiss_cli [OPTIONS] <COMMAND> [ARGS]

COMMANDS:
  migrate                  Create or update the tournament schema
  register <NAME>          Register a player and print their ID
  report <WINNER> <LOSER>  Record that WINNER beat LOSER
  standings                Print players ranked by wins
  pairings                 Print pairings for the next round
  count                    Print the number of registered players
  reset-matches            Delete all match records
  reset-players            Delete all players and their matches

OPTIONS:
  --db-url     URL         Database connection string  [default: env DATABASE_URL or postgres://postgres@localhost/tournament]
  --json                   Print results as JSON

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  DATABASE_URL             PostgreSQL connection string
  DB_MAX_CONNECTIONS       Maximum pool size [default: 10]
  DB_MIN_CONNECTIONS       Minimum pool size [default: 1]
  DB_CONNECTION_TIMEOUT    Connection timeout in seconds [default: 10]
  DB_IDLE_TIMEOUT          Idle connection timeout in seconds [default: 600]
  DB_MAX_LIFETIME          Maximum connection lifetime in seconds [default: 1800]
  DB_QUERY_TIMEOUT         Per-statement timeout in seconds [default: 5]
  RUST_LOG                 Log filter (e.g. info, swiss_tournament=debug)
  (A .env file in the working directory is loaded if present)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let json = pargs.contains("--json");
    let database_url: Option<String> = pargs.opt_value_from_str("--db-url")?;

    let free: Vec<String> = pargs
        .finish()
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let command = parse_command(&free)?;

    // Catching signals for exit.
    set_handler(|| std::process::exit(130))?;

    env_logger::builder().format_target(false).init();

    let config = CliConfig::from_env(database_url, json)?;
    config.validate()?;

    run(command, config).await
}

async fn run(command: Command, config: CliConfig) -> Result<(), Error> {
    info!("Connecting to database: {}", config.database.database_url);
    let db = Database::new(&config.database)
        .await
        .context("Failed to connect to database")?;

    let store = PgTournamentStore::new(Arc::new(db.pool().clone()))
        .with_query_timeout(config.database.query_timeout());
    let tournament = TournamentManager::new(Arc::new(store));

    let result = execute(&db, &tournament, command, &config).await;
    db.close().await;
    result
}

async fn execute(
    db: &Database,
    tournament: &TournamentManager,
    command: Command,
    config: &CliConfig,
) -> Result<(), Error> {
    match command {
        Command::Migrate => {
            db.migrate().await.context("Failed to apply migrations")?;
            println!("Schema is up to date");
        }
        Command::Register { name } => {
            let id = tournament.register_player(&name).await?;
            println!("{id}");
        }
        Command::Report { winner, loser } => {
            let record = tournament.report_match(winner, loser).await?;
            println!(
                "Match #{} recorded: #{} beat #{}",
                record.id, record.winner_id, record.loser_id
            );
        }
        Command::Standings => {
            let standings = tournament.player_standings().await?;
            println!("{}", output::render_standings(&standings, config.output)?);
        }
        Command::Pairings => {
            let pairings = tournament.swiss_pairings().await?;
            println!("{}", output::render_pairings(&pairings, config.output)?);
        }
        Command::Count => {
            println!("{}", tournament.count_players().await?);
        }
        Command::ResetMatches => {
            let removed = tournament.delete_matches().await?;
            println!("Deleted {removed} match(es)");
        }
        Command::ResetPlayers => {
            let removed = tournament.delete_players().await?;
            println!("Deleted {removed} player(s)");
        }
    }

    Ok(())
}
