//! Profile page: gate, fetch, parse, compose, render.

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Select};

use auth_client::AuthClient;
use teamtree_core::{
    check_session, compose_sections, logout, parse_profile, SessionState, SessionStore,
};

use crate::render;
use crate::routes::Route;

/// Show the signed-in account's profile. The session check always
/// completes before any network call is made.
pub async fn show(term: &Term, client: &AuthClient, store: &dyn SessionStore) -> Result<Route> {
    let token = match check_session(store) {
        SessionState::Authorized { token } => token,
        SessionState::Unauthorized => return Ok(Route::SignIn),
    };

    println!("{}", "Loading profile...".dimmed());
    let raw = match client.fetch_profile(&token).await {
        Ok(raw) => raw,
        Err(err) if err.is_auth_failure() => {
            // Stale or revoked identity: drop the session quietly and go
            // back to sign-in, no error banner.
            logout(store);
            return Ok(Route::SignIn);
        }
        Err(err) => return no_data(term, err),
    };

    let tree = match parse_profile(&raw) {
        Ok(tree) => tree,
        Err(err) => return no_data(term, err),
    };

    render::sections(&compose_sections(&tree));

    let options = vec!["Refresh", "Sign out", "Exit"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact_on(term)?;

    Ok(match selection {
        0 => Route::Home,
        1 => {
            logout(store);
            println!("{}", "Signed out.".dimmed());
            Route::SignIn
        }
        _ => Route::Exit,
    })
}

/// Recoverable no-data state with a manual way back to sign-in.
fn no_data(term: &Term, err: impl std::fmt::Display) -> Result<Route> {
    println!();
    println!("{} {}", "Could not load your profile:".bright_red(), err);

    let options = vec!["Return to login", "Exit"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .items(&options)
        .default(0)
        .interact_on(term)?;

    Ok(if selection == 0 {
        Route::SignIn
    } else {
        Route::Exit
    })
}
