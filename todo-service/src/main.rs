//! Todo Notes Service: REST API for notes and their todo items.
//!
//! Notes and items live in a SQLite table pair; the HTTP surface is served
//! by axum under `/todos`.
//!
//! Default: http://127.0.0.1:5000/

mod config;
mod db;
mod error;
mod routes;
mod validate;

use clap::{Parser, Subcommand};
use config::Config;
use db::Database;
use routes::AppState;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "todo-notes-service", version, about = "REST API for todo notes and items")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Drop and recreate the database schema
    InitDb,
    /// Recreate the schema and load the development dataset
    SeedData,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let db = match Database::open(&config.database_path) {
        Ok(db) => db,
        Err(e) => {
            log::error!("Failed to open database at {}: {}", config.database_path, e);
            std::process::exit(1);
        }
    };

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, db).await,
        Command::InitDb => {
            if let Err(e) = db.reset() {
                log::error!("Failed to initialize database: {}", e);
                std::process::exit(1);
            }
            println!("Initialized fresh new DB");
        }
        Command::SeedData => {
            if let Err(e) = db.seed() {
                log::error!("Failed to seed database: {}", e);
                std::process::exit(1);
            }
            println!("Added development dataset");
        }
    }
}

async fn serve(config: &Config, db: Database) {
    let state = Arc::new(AppState { db });

    let cors = tower_http::cors::CorsLayer::permissive();
    let app = routes::router(state).layer(cors);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Todo Notes Service listening on http://{} (database: {})",
        addr,
        config.database_path
    );

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_serve() {
        let cli = Cli::parse_from(["todo-notes-service"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_subcommands() {
        let cli = Cli::parse_from(["todo-notes-service", "init-db"]);
        assert!(matches!(cli.command, Some(Command::InitDb)));

        let cli = Cli::parse_from(["todo-notes-service", "seed-data"]);
        assert!(matches!(cli.command, Some(Command::SeedData)));
    }
}
