//! CLI entry point for saveur

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use saveur::catalog::CategoryKind;
use saveur::i18n::Locale;

#[derive(Parser)]
#[command(name = "saveur")]
#[command(version)]
#[command(about = "Content pipeline for a localized food & pairing site", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts for a locale
    #[command(alias = "ls")]
    List {
        /// Locale to list (en, ko, zh, ja)
        #[arg(default_value = "en")]
        locale: String,

        /// Restrict to one catalog (recipe, pairing)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Show a single post with rendered content
    Show {
        /// Post slug
        slug: String,

        /// Locale to resolve in
        #[arg(short, long, default_value = "en")]
        locale: String,
    },

    /// List the category catalogs
    Categories {
        /// Restrict to one catalog (recipe, pairing)
        #[arg(short, long)]
        kind: Option<String>,

        /// Locale for display names
        #[arg(short, long, default_value = "en")]
        locale: String,
    },

    /// Create a new content file
    New {
        /// Title of the new post
        title: String,

        /// Locale to create the post in
        #[arg(short, long, default_value = "en")]
        locale: String,
    },
}

fn parse_kind(s: &str) -> Result<CategoryKind> {
    match s {
        "recipe" | "recipes" => Ok(CategoryKind::Recipe),
        "pairing" | "pairings" => Ok(CategoryKind::Pairing),
        other => anyhow::bail!("unknown catalog kind: {:?} (expected recipe or pairing)", other),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "saveur=debug,info"
    } else {
        "saveur=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let site = saveur::Saveur::new(&base_dir)?;

    match cli.command {
        Commands::List { locale, kind } => {
            let locale: Locale = locale.parse()?;
            let kind = kind.as_deref().map(parse_kind).transpose()?;
            saveur::commands::list::run(&site, locale, kind)?;
        }

        Commands::Show { slug, locale } => {
            let locale: Locale = locale.parse()?;
            saveur::commands::show::run(&site, &slug, locale)?;
        }

        Commands::Categories { kind, locale } => {
            let locale: Locale = locale.parse()?;
            let kind = kind.as_deref().map(parse_kind).transpose()?;
            saveur::commands::categories::run(&site, kind, locale)?;
        }

        Commands::New { title, locale } => {
            let locale: Locale = locale.parse()?;
            tracing::info!("Creating new {} post: {}", locale, title);
            saveur::commands::new::run(&site, &title, locale)?;
        }
    }

    Ok(())
}
