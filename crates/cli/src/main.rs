//! Sandy CLI: the main entry point.
//!
//! Commands:
//! - `chat`: Interactive chat or single-message mode
//! - `recommend`: Personalized recommendations for a profile
//! - `intake`: Respond to one intake questionnaire answer
//! - `doctor`: Diagnose configuration and provider health
//! - `config`: Print the default configuration

use std::path::PathBuf;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "sandy",
    about = "Sandy — a conversational support assistant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with Sandy
    Chat {
        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,

        /// User identifier for conversation memory
        #[arg(short, long, default_value = commands::DEFAULT_USER)]
        user: String,

        /// JSON file holding the user profile
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Mark the conversation as a crisis
        #[arg(long)]
        crisis: bool,
    },

    /// Generate personalized recommendations
    Recommend {
        /// Focus area for the recommendations
        #[arg(short, long)]
        area: Option<String>,

        /// JSON file holding the user profile
        #[arg(short, long)]
        profile: Option<PathBuf>,
    },

    /// Process one intake questionnaire answer
    Intake {
        /// Questionnaire section the answer belongs to
        #[arg(short, long)]
        section: String,

        /// The user's answer
        #[arg(short, long)]
        response: String,

        /// User identifier
        #[arg(short, long, default_value = commands::DEFAULT_USER)]
        user: String,

        /// JSON file holding the user profile
        #[arg(short, long)]
        profile: Option<PathBuf>,
    },

    /// Diagnose configuration and provider health
    Doctor,

    /// Print the default configuration file
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Chat {
            message,
            user,
            profile,
            crisis,
        } => commands::chat::run(message, user, profile, crisis).await?,
        Commands::Recommend { area, profile } => commands::recommend::run(area, profile).await?,
        Commands::Intake {
            section,
            response,
            user,
            profile,
        } => commands::intake::run(section, response, user, profile).await?,
        Commands::Doctor => commands::doctor::run().await?,
        Commands::Config => commands::config_cmd::run(),
    }

    Ok(())
}
