//! CLI administration tool for runner-app.
//!
//! Manages reference data and clubs, shows statistics and performs
//! database checks without going through the web UI.
//!
//! # Usage
//!
//! ```bash
//! # List roles / restore the default role
//! cargo run --bin admin -- role list
//! cargo run --bin admin -- role create USER
//!
//! # List clubs, delete one (with its events)
//! cargo run --bin admin -- club list
//! cargo run --bin admin -- club delete 3 -y
//!
//! # Look up a user by username or email
//! cargo run --bin admin -- user show alice
//!
//! # Counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection

use runner_app::application::services::{ClubService, UserService};
use runner_app::config::{Config, mask_connection_string};
use runner_app::domain::entities::DEFAULT_ROLE;
use runner_app::domain::repositories::RoleRepository;
use runner_app::infrastructure::persistence::{
    PgClubRepository, PgRoleRepository, PgUserRepository,
};
use runner_app::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing runner-app.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage roles
    Role {
        #[command(subcommand)]
        action: RoleAction,
    },

    /// Manage clubs
    Club {
        #[command(subcommand)]
        action: ClubAction,
    },

    /// Inspect users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum RoleAction {
    /// List all roles
    List,

    /// Create a role (e.g. restore the default USER role)
    Create {
        /// Role name
        name: String,
    },
}

#[derive(Subcommand)]
enum ClubAction {
    /// List all clubs
    List,

    /// Delete a club and its events
    Delete {
        /// Club ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Show a user and their roles
    Show {
        /// Username, or email if it contains '@'
        login: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Role { action } => handle_role_action(action, &pool).await?,
        Commands::Club { action } => handle_club_action(action, &pool).await?,
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

/// Dispatches role commands.
async fn handle_role_action(action: RoleAction, pool: &PgPool) -> Result<()> {
    let repo = PgRoleRepository::new(Arc::new(pool.clone()));

    match action {
        RoleAction::List => {
            println!("{}", "🏷️  Roles".bright_blue().bold());
            println!();

            let roles = repo
                .find_all()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list roles: {}", e))?;

            if roles.is_empty() {
                println!("{}", "  No roles found".yellow());
            }

            for role in &roles {
                let marker = if role.name == DEFAULT_ROLE {
                    " (default)".green()
                } else {
                    "".normal()
                };
                println!(
                    "  {:<4} {}{}",
                    role.id.to_string().bright_black(),
                    role.name.cyan(),
                    marker
                );
            }

            if !roles.iter().any(|r| r.name == DEFAULT_ROLE) {
                println!();
                println!(
                    "{}",
                    format!("⚠️  Default role {DEFAULT_ROLE} is missing; registration will fail")
                        .red()
                        .bold()
                );
                println!(
                    "  Restore it with: {} admin role create {DEFAULT_ROLE}",
                    "cargo run --bin".bright_cyan()
                );
            }
            println!();
        }
        RoleAction::Create { name } => {
            let role = repo
                .create(&name)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create role: {}", e))?;

            println!(
                "{} {} (id {})",
                "✅ Role created:".green().bold(),
                role.name.cyan(),
                role.id
            );
        }
    }

    Ok(())
}

/// Dispatches club commands.
async fn handle_club_action(action: ClubAction, pool: &PgPool) -> Result<()> {
    let service = ClubService::new(Arc::new(PgClubRepository::new(Arc::new(pool.clone()))));

    match action {
        ClubAction::List => {
            println!("{}", "📋 Clubs".bright_blue().bold());
            println!();

            let clubs = service
                .find_all_clubs()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list clubs: {}", e))?;

            if clubs.is_empty() {
                println!("{}", "  No clubs found".yellow());
                return Ok(());
            }

            println!(
                "  {:<5} {:<40} {:<20}",
                "ID".bright_white().bold(),
                "Title".bright_white().bold(),
                "Created".bright_white().bold()
            );
            println!("  {}", "─".repeat(67).bright_black());

            for club in &clubs {
                let created = club
                    .created_on
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                println!(
                    "  {:<5} {:<40} {}",
                    club.id.unwrap_or_default().to_string().bright_black(),
                    club.title.cyan(),
                    created.bright_black()
                );
            }

            println!();
            println!("  Total: {}", clubs.len().to_string().bright_white().bold());
            println!();
        }
        ClubAction::Delete { id, yes } => {
            let club = service
                .find_club_by_id(id)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))
                .context("Cannot delete club")?;

            println!("  Club: {}", club.title.cyan());
            println!("  ID:   {}", id.to_string().bright_black());
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Delete this club and all its events?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            service
                .delete_club(id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to delete club: {}", e))?;

            println!("{}", "✅ Club deleted".green().bold());
        }
    }

    Ok(())
}

/// Dispatches user commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let pool = Arc::new(pool.clone());
    let service = UserService::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgRoleRepository::new(pool)),
    );

    match action {
        UserAction::Show { login } => {
            let user = if login.contains('@') {
                service.find_by_email(&login).await
            } else {
                service.find_by_username(&login).await
            }
            .map_err(|e| anyhow::anyhow!("Failed to look up user: {}", e))?;

            let Some(user) = user else {
                println!("{}", format!("❌ No user matches {login}").red());
                return Ok(());
            };

            println!("{}", "👤 User".bright_blue().bold());
            println!();
            println!("  ID:       {}", user.id.to_string().bright_black());
            println!("  Username: {}", user.username.cyan());
            println!("  Email:    {}", user.email);
            println!("  Roles:    {}", user.role_names().join(", ").green());
            println!();
        }
    }

    Ok(())
}

/// Displays record counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let clubs_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clubs")
        .fetch_one(pool)
        .await?;

    let events_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
        .fetch_one(pool)
        .await?;

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    println!("  Clubs:  {}", clubs_count.to_string().bright_green().bold());
    println!("  Events: {}", events_count.to_string().bright_green().bold());
    println!("  Users:  {}", users_count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  URL:        {}", mask_connection_string(&config.database_url));
            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
