//! CLI entry point - the composition root.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use reportdrive_cli::error::exit_code_for;
use reportdrive_cli::{Cli, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before parsing so it can supply argument defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = bootstrap(&cli)?;

    match cli.command {
        Commands::ReportsFolder { mcc } => handlers::reports_folder::execute(&ctx, &mcc).await,
        Commands::AccountFolder { mcc, account } => {
            handlers::account_folder::execute(&ctx, &mcc, &account).await
        }
        Commands::GetFile { file_id } => handlers::get_file::execute(&ctx, &file_id).await,
    }
}
