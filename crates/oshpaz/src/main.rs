// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Oshpaz - a Telegram mini-app storefront.
//!
//! One binary, two processes: `oshpaz serve` runs the HTTP storefront
//! API, `oshpaz notify` runs the chat-bot relays. They share state
//! only through the JSON files in the configured data directory.

use clap::{Parser, Subcommand};

mod notify;
mod serve;

/// Oshpaz - a Telegram mini-app storefront.
#[derive(Parser, Debug)]
#[command(name = "oshpaz", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the storefront HTTP service.
    Serve,
    /// Start the notifier process (admin and status relays).
    Notify,
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("oshpaz={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match oshpaz_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            oshpaz_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.service.log_level);

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Notify) => notify::run_notify(config).await,
        None => {
            println!("oshpaz: use --help for available commands");
            return;
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "oshpaz exited with an error");
        std::process::exit(1);
    }
}
