use std::fs;

use clap::Parser;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use sea_orm::SqlxSqliteConnector;
use serde::Deserialize;
use sqlx::sqlite::SqlitePoolOptions;

use tokio::main;

use trackbook::{build_router, AppState};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, short, default_value_t = 3)]
    verbosity: usize,
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
    #[arg(long, short)]
    config: Option<String>,
}

#[derive(Deserialize)]
struct Config {
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_database")]
    database: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: default_port(),
            database: default_database(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_database() -> String {
    "sqlite://trackbook.db?mode=rwc".to_string()
}

#[main]
async fn main() -> Result<(), sqlx::Error> {
    let args = Args::parse();
    stderrlog::new()
        .verbosity(args.verbosity)
        .quiet(args.quiet)
        .timestamp(stderrlog::Timestamp::Millisecond)
        .init()
        .unwrap();

    let config = match args.config {
        Some(path) => {
            info!("Configuration path: {}", path);
            let config_string = match fs::read_to_string(path) {
                Ok(config_string) => config_string,
                Err(err) => {
                    error!("Error opening configuration file: {}", err);
                    return Ok(());
                }
            };
            match serde_json::from_str::<Config>(config_string.as_str()) {
                Ok(config) => config,
                Err(err) => {
                    error!("Malformed configuration: {}", err);
                    return Ok(());
                }
            }
        }
        None => Config::default(),
    };

    let pool = match SqlitePoolOptions::new()
        .max_connections(5)
        .connect(config.database.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(err) => {
            error!("Error connecting to database: {}", err);
            return Ok(());
        }
    };

    let connection = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool.to_owned());
    if let Err(err) = Migrator::up(&connection, None).await {
        error!("Error running migrations: {}", err);
        return Ok(());
    }

    let app = build_router(AppState {
        pool: pool.to_owned(),
    });

    info!("Listening on 0.0.0.0:{}", config.port);
    info!("Welcome to Trackbook!");

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Error binding port {}: {}", config.port, err);
            return Ok(());
        }
    };
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server error: {}", err);
    }
    Ok(())
}
