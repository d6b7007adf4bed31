//! CLI administration tool for the CUBE backend.
//!
//! Clubs are provisioned out-of-band; this tool is that band. It also
//! issues club-scoped API tokens and checks database connectivity.
//!
//! # Usage
//!
//! ```bash
//! # Provision a club (prompts for missing fields)
//! cargo run --bin admin -- club create --tier Mega
//!
//! # List clubs
//! cargo run --bin admin -- club list
//!
//! # Issue a Club JWT for API access
//! cargo run --bin admin -- token issue --club-id 3
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `JWT_SECRET` (required for `token issue`): token signing secret

use cube_api::application::services::{JwtCodec, UserType};
use cube_api::domain::entities::{ClubTier, NewClub};
use cube_api::domain::repositories::ClubRepository;
use cube_api::infrastructure::persistence::PgClubRepository;
use cube_api::utils::code_generator::generate_code;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the CUBE backend.
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
    /// Manage clubs
    Club {
        #[command(subcommand)]
        action: ClubAction,
    },

    /// Issue API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Club management subcommands.
#[derive(Subcommand)]
enum ClubAction {
    /// Provision a new club
    Create {
        /// Club display name
        #[arg(short, long)]
        name: Option<String>,

        /// Contact email (unique)
        #[arg(short, long)]
        email: Option<String>,

        /// Partnership tier: Nano, Micro, Mega, or Giga
        #[arg(short, long)]
        tier: Option<String>,

        /// Mark the club as featured
        #[arg(short, long)]
        featured: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all clubs
    List,
}

/// Token subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Issue a Club JWT for API access
    Issue {
        /// Club id to issue the token for
        #[arg(long)]
        club_id: i64,

        /// Token lifetime in hours
        #[arg(long, default_value_t = 72)]
        expiry_hours: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Club { action } => match action {
            ClubAction::Create {
                name,
                email,
                tier,
                featured,
                yes,
            } => create_club(pool, name, email, tier, featured, yes).await,
            ClubAction::List => list_clubs(pool).await,
        },
        Commands::Token { action } => match action {
            TokenAction::Issue {
                club_id,
                expiry_hours,
            } => issue_token(pool, club_id, expiry_hours).await,
        },
        Commands::Db { action } => match action {
            DbAction::Check => db_check(pool).await,
        },
    }
}

async fn create_club(
    pool: PgPool,
    name: Option<String>,
    email: Option<String>,
    tier: Option<String>,
    featured: bool,
    yes: bool,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Club name").interact_text()?,
    };

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Contact email").interact_text()?,
    };

    let tier: ClubTier = match tier {
        Some(t) => t.parse().map_err(anyhow::Error::msg)?,
        None => Input::<String>::new()
            .with_prompt("Tier (Nano/Micro/Mega/Giga)")
            .default("Nano".to_string())
            .interact_text()?
            .parse()
            .map_err(anyhow::Error::msg)?,
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Create club '{name}' <{email}> ({})?", tier.as_str()))
            .default(true)
            .interact()?;
        if !confirmed {
            println!("{}", "Aborted".yellow());
            return Ok(());
        }
    }

    // The initial secret is shown once; only its digest is stored.
    let initial_secret = generate_code();
    let password_hash = hex::encode(Sha256::digest(initial_secret.as_bytes()));

    let repository = PgClubRepository::new(Arc::new(pool));
    let club = repository
        .create(NewClub {
            name,
            email,
            password_hash,
            tier,
            featured,
        })
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    println!("{}", "Club created".green().bold());
    println!("  id:      {}", club.id);
    println!("  name:    {}", club.name);
    println!("  email:   {}", club.email);
    println!("  tier:    {}", club.tier.as_str());
    println!();
    println!(
        "  initial secret: {}",
        initial_secret.bold()
    );
    println!("  {}", "Store it now; it is not retrievable later.".yellow());

    Ok(())
}

async fn list_clubs(pool: PgPool) -> Result<()> {
    let repository = PgClubRepository::new(Arc::new(pool));
    let clubs = repository
        .list()
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    if clubs.is_empty() {
        println!("{}", "No clubs".yellow());
        return Ok(());
    }

    for club in clubs {
        let featured = if club.featured { " [featured]" } else { "" };
        println!(
            "{:>5}  {:<28} {:<34} {}{}",
            club.id,
            club.name,
            club.email,
            club.tier.as_str().cyan(),
            featured.green()
        );
    }

    Ok(())
}

async fn issue_token(pool: PgPool, club_id: i64, expiry_hours: i64) -> Result<()> {
    let secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

    let repository = PgClubRepository::new(Arc::new(pool));
    let club = repository
        .find_by_id(club_id)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .with_context(|| format!("No club with id {club_id}"))?;

    let codec = JwtCodec::new(&secret, expiry_hours);
    let token = codec
        .issue(club.id, &club.name, UserType::Club)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    println!("{} {}", "Token for".green(), club.name.bold());
    println!("{token}");

    Ok(())
}

async fn db_check(pool: PgPool) -> Result<()> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
        .context("Database check failed")?;

    println!("{}", "Database connection OK".green());
    Ok(())
}
