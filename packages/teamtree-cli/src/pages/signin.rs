//! Sign-in page, and the entry point for new accounts.

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

use auth_client::{AuthClient, SigninRequest};
use teamtree_core::{establish_session, SessionStore};

use crate::routes::Route;

pub async fn show(term: &Term, client: &AuthClient, store: &dyn SessionStore) -> Result<Route> {
    println!();
    println!("{}", "Sign in".bright_cyan().bold());

    let options = vec!["Sign in with email", "Create an account", "Exit"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .items(&options)
        .default(0)
        .interact_on(term)?;
    match selection {
        1 => return Ok(Route::SignUp),
        2 => return Ok(Route::Exit),
        _ => {}
    }

    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Email")
        .allow_empty(true)
        .interact_text()?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;

    let email = email.trim().to_string();
    if email.is_empty() || password.is_empty() {
        println!("{}", "Email and password are both required.".bright_red());
        return Ok(Route::SignIn);
    }

    println!("{}", "Signing in...".dimmed());
    match client.signin(&SigninRequest { email, password }).await {
        Ok(outcome) => {
            establish_session(store, &outcome.user.id, &outcome.role);
            println!("{}", "Signed in.".bright_green());
            Ok(Route::Home)
        }
        Err(err) => {
            // Inline failure; the form stays available.
            println!("{} {}", "Sign-in failed:".bright_red(), err);
            Ok(Route::SignIn)
        }
    }
}
