//! dk - CLI entry point
//!
//! Resolves credentials and the target board (cached between runs), performs
//! the weekly rotation, then the monthly consolidation, and prints what
//! happened.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use cachestore::CacheStore;
use donekeeper::cli::Cli;
use donekeeper::config::Config;
use donekeeper::planner::{consolidation, rotation};
use donekeeper::prompt::{self, TerminalPrompt};
use donekeeper::trello::{BoardService, TrelloClient};

/// Cache keys for values that survive between runs
const AUTH_TOKEN_KEY: &str = "trello-auth-token";
const BOARD_ID_KEY: &str = "board-id";

fn setup_logging(verbose: bool) -> Result<()> {
    // Log to a file; stdout belongs to the prompts and status lines
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("donekeeper")
        .join("logs");
    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let log_file =
        fs::File::create(log_dir.join("donekeeper.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("donekeeper")
        .join("db.json")
}

/// Auth token from the cache, prompting on first run
async fn resolve_auth_token(store: &CacheStore) -> Result<String> {
    store
        .fetch_or_cache(AUTH_TOKEN_KEY, || async { prompt::read_line("App token? ") })
        .await
}

/// Board id from the cache, selecting interactively on first run
async fn resolve_board_id(store: &CacheStore, client: &TrelloClient) -> Result<String> {
    store
        .fetch_or_cache(BOARD_ID_KEY, || async {
            let boards = client.get_boards().await?;
            if boards.is_empty() {
                return Err(eyre::eyre!("No boards visible to this token"));
            }
            println!("Select a board:");
            let index = prompt::select_index(&boards, |board| board.name.as_str())?;
            Ok(boards[index].id.clone())
        })
        .await
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate()?;

    let store = CacheStore::open(db_path())?;
    let auth_token = resolve_auth_token(&store).await?;
    let app_key = config.trello.resolve_app_key()?;
    let client = TrelloClient::new(app_key, auth_token, &config.trello)?;

    let board_id = resolve_board_id(&store, &client).await?;
    let terminal = TerminalPrompt;
    let today = chrono::Local::now().date_naive();

    info!(%board_id, %today, "Starting weekly rotation");
    let outcome = rotation::run(
        &client,
        &terminal,
        &board_id,
        today,
        config.propagation.to_poll(),
    )
    .await
    .context("Weekly rotation failed")?;

    if !outcome.created_this_week_list && !outcome.moved_done_week_list {
        println!("Nothing to do.");
    } else if outcome.moved_done_week_list {
        println!("{} Moved last week's done list.", "✓".green());
    } else {
        println!("{} No last week done list, created new one.", "✓".green());
    }

    if let Some(view) = &outcome.board_view {
        for (index, list) in view.lists.iter().enumerate() {
            if index == view.created_index || list.id == view.moved_list_id {
                println!("{}", list.name.bold().green());
            } else {
                println!("{}", list.name);
            }
        }
    }

    let consolidated = consolidation::run(&client, &board_id)
        .await
        .context("Monthly consolidation failed")?;

    if consolidated.is_empty() {
        println!("No done lists to consolidate.");
    } else {
        println!("{} Consolidated the following done lists:", "✓".green());
        for name in consolidated {
            println!("{}", name);
        }
    }

    Ok(())
}
