//! users-admin - database management commands for users-server
//!
//! # Examples
//!
//! ```bash
//! # Drop all tables and reapply migrations
//! users-admin recreate-db
//!
//! # Load the default development users
//! users-admin seed-db
//! ```

use users_server::{Config, logger};

use users_core::NewUser;
use users_db::UserRepository;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;
use sqlx::SqlitePool;

/// Development users loaded by `seed-db`.
const SEED_USERS: [(&str, &str); 4] = [
    ("mahfuz", "mahfuz@endecoder.com"),
    ("shawon", "shawon@endecoder.com"),
    ("alamin", "alamin@mah3uz.com"),
    ("admin", "admin@endecoder.com"),
];

#[derive(Parser)]
#[command(name = "users-admin")]
#[command(about = "Database management for users-server")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop all tables and reapply migrations, erasing stored data
    RecreateDb,

    /// Insert the default development users
    SeedDb,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(config.log_level, None, config.log_colored) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let pool = match users_db::create_pool(&config.database_path, config.max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::RecreateDb => recreate_db(&pool).await,
        Commands::SeedDb => seed_db(&pool).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn recreate_db(pool: &SqlitePool) -> users_db::Result<()> {
    users_db::admin::recreate_database(pool).await?;
    info!("Database recreated");

    Ok(())
}

async fn seed_db(pool: &SqlitePool) -> users_db::Result<()> {
    let repo = UserRepository::new(pool.clone());

    for (username, email) in SEED_USERS {
        if repo.find_by_email(email).await?.is_some() {
            info!("Seed user already exists: {}", email);
            continue;
        }

        let user = repo
            .insert(&NewUser::new(username.to_string(), email.to_string()))
            .await?;
        info!("Seeded user {} ({})", user.id, user.email);
    }

    Ok(())
}
