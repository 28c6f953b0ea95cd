//! Tic-tac-toe console entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_console::{
    shared_input, spawn_printer, spawn_stdin_reader, Cli, Command, ConsoleConfig, Session,
};
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (args, print_only) = match &cli.command {
        Command::Play(args) => (args, false),
        Command::Config(args) => (args, true),
    };
    let config = ConsoleConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(args, cli.log_level.as_deref());

    if print_only {
        print!("{}", toml::to_string(&config).context("Failed to render configuration")?);
        return Ok(());
    }

    init_tracing(config.log_level());
    run_session(config).await
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run matches until the user quits
#[instrument(skip_all, fields(mode = ?config.mode()))]
async fn run_session(config: ConsoleConfig) -> Result<()> {
    info!("Starting console session");

    let (line_tx, line_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    spawn_stdin_reader(line_tx);
    let printer = spawn_printer(event_rx);

    let mut session = Session::new(config, shared_input(line_rx), event_tx);
    let result = session.run().await;

    drop(session);
    printer.await.context("Printer task failed")?;
    result
}
