//! Weather bot CLI
//!
//! Interactive shell over the chat core: each input line is dispatched
//! exactly like a chat message and the reply is printed. Useful for
//! local testing without a chat transport.

#![allow(clippy::print_stdout)]

mod dispatcher;

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use application::ports::{PreferenceStore, SessionStore, WeatherProvider};
use application::services::{ChatService, ForecastService, LocationResolver, SessionFlow};
use clap::Parser;
use domain::UserId;
use infrastructure::config::AppConfig;
use infrastructure::persistence::{SqlitePreferenceStore, create_pool};
use infrastructure::session::InMemorySessionStore;
use infrastructure::OwmWeatherAdapter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Weather bot CLI
#[derive(Parser)]
#[command(name = "weatherbot-cli")]
#[command(author, version, about = "OpenWeatherMap chat bot CLI", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "weatherbot.toml")]
    config: PathBuf,

    /// User id to act as (preferences and dialog state are keyed by it)
    #[arg(short, long, default_value = "local")]
    user: String,

    /// One-shot message; without it an interactive shell starts
    message: Option<String>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_chat_service(config: &AppConfig) -> anyhow::Result<ChatService> {
    let pool = create_pool(&config.database)?;

    let provider: Arc<dyn WeatherProvider> =
        Arc::new(OwmWeatherAdapter::new(config.weather.clone())?);
    let preferences: Arc<dyn PreferenceStore> =
        Arc::new(SqlitePreferenceStore::new(Arc::new(pool)));
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    Ok(ChatService::new(
        LocationResolver::new(Arc::clone(&provider), Arc::clone(&preferences)),
        ForecastService::new(Arc::clone(&provider)),
        SessionFlow::new(provider, preferences, Arc::clone(&sessions)),
        sessions,
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = log_filter_from_verbosity(cli.verbose);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load(&cli.config)?;
    let service = build_chat_service(&config)?;
    let user = UserId::new(cli.user);

    if let Some(message) = cli.message {
        let reply = service.handle(&user, dispatcher::parse_message(&message)).await?;
        println!("{reply}");
        return Ok(());
    }

    println!("Type /help for commands, Ctrl-D to quit.");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let reply = service.handle(&user, dispatcher::parse_message(&line)).await?;
        println!("{reply}\n");
    }

    Ok(())
}
