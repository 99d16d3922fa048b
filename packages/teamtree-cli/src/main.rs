use anyhow::{Context, Result};
use colored::Colorize;
use console::Term;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod pages;
mod render;
mod routes;

use auth_client::AuthClient;
use config::Config;
use routes::Route;
use teamtree_core::{MemorySessionStore, SubmitGuard};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,teamtree_core=info,auth_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(api = %config.api_base_url, "configuration loaded");

    let client = AuthClient::new(config.api_base_url);
    let store = MemorySessionStore::new();
    let signup_guard = SubmitGuard::new();

    let term = Term::stdout();
    print_banner(&term)?;

    // Page loop; each page decides where to go next.
    let mut route = Route::Home;
    loop {
        route = match route {
            Route::Home => pages::home::show(&term, &client, &store).await?,
            Route::SignIn => pages::signin::show(&term, &client, &store).await?,
            Route::SignUp => {
                pages::signup::show(&term, &client, &store, &signup_guard).await?
            }
            Route::Exit => break,
        };
    }

    println!("{}", "Goodbye!".bright_blue());
    Ok(())
}

fn print_banner(term: &Term) -> Result<()> {
    term.clear_screen()?;
    println!(
        "{}",
        "╔════════════════════════════════════════╗".bright_cyan()
    );
    println!(
        "{}",
        "║              Teamtree                  ║".bright_cyan()
    );
    println!(
        "{}",
        "╚════════════════════════════════════════╝".bright_cyan()
    );
    println!();
    Ok(())
}
