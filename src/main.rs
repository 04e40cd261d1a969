//! hostelhub - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hostelhub::{
    cli::{Cli, Commands},
    commands,
    config::Settings,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let settings = Settings::from_env();
    tracing::debug!("Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::SignUp(args) => commands::auth::sign_up(args, settings).await,
        Commands::SignIn(args) => commands::auth::sign_in(args, settings).await,
        Commands::SignOut => commands::auth::sign_out(settings).await,
        Commands::Whoami => commands::auth::whoami(settings).await,
        Commands::Watch => commands::watch::execute(settings).await,
        Commands::Rooms(args) => commands::rooms::execute(args, settings).await,
        Commands::Students(args) => commands::students::execute(args, settings).await,
        Commands::Profile(args) => commands::profile::execute(args, settings).await,
        Commands::Maintenance(args) => commands::maintenance::execute(args, settings).await,
        Commands::Resources(args) => commands::resources::execute(args, settings).await,
        Commands::Notifications(args) => commands::notifications::execute(args, settings).await,
        Commands::Chat(args) => commands::chat::execute(args, settings).await,
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
