//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use league_table::{
    cli::{Commands, LeagueCli},
    commands::{
        open_database,
        seed::handle_seed,
        serve::handle_serve,
        table::{handle_table, TableParams},
        teams::{handle_teams, TeamsParams},
    },
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let app = LeagueCli::parse();
    let mut db = open_database(app.db).context("failed to open database")?;

    match app.command {
        Commands::Serve { host, port } => handle_serve(db, &host, port)
            .await
            .context("web application failed")?,

        Commands::Seed => {
            handle_seed(&mut db).context("failed to populate demo data")?;
        }

        Commands::Table { json, output } => {
            handle_table(
                &db,
                TableParams {
                    as_json: json,
                    output,
                },
            )?;
        }

        Commands::Teams {
            search,
            without_fixtures,
            json,
        } => {
            handle_teams(
                &db,
                TeamsParams {
                    search,
                    without_fixtures,
                    as_json: json,
                },
            )?;
        }
    }

    Ok(())
}
