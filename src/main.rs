use std::{
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use harvest_api::{config::Config, report, Client};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Command line client for the Harvest time-tracking API
#[derive(Debug, Parser)]
#[command(name = "harvest", version, about)]
struct Cli {
    /// Dotenv file holding HARVEST_ACCOUNT_ID and ACCESS_TOKEN. Defaults to `.env`, if present.
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List your projects.
    #[command(name = "get-projects", alias = "getProjects")]
    GetProjects,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn load_config(env_file: Option<&Path>) -> Result<Config, harvest_api::Error> {
    match env_file {
        Some(path) => Config::from_env_file(path),
        None => {
            if let Err(error) = dotenvy::dotenv() {
                tracing::debug!(%error, "No .env file loaded");
            }
            Config::from_env()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config = match load_config(cli.env_file.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };
    let client = Client::from_config(config);

    match cli.command {
        Command::GetProjects => {
            tracing::debug!("getProjects called");
            let mut stdout = io::stdout().lock();
            // Only undecodable responses and a broken stdout end the process abnormally
            if let Err(error) = report::list_projects(&client, &mut stdout).await {
                eprintln!("{error}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
