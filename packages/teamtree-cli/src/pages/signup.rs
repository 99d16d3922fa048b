//! Registration page: fetch parent candidates, collect the form, derive
//! the tier, submit.

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

use auth_client::{AuthClient, SignupRequest};
use teamtree_core::{
    establish_session, resolve_tier, ParentCandidate, SessionStore, SubmitGuard,
};

use crate::routes::Route;

/// No-parent choice shown at the top of the parent selector.
const REGISTER_AS_ADMIN: &str = "None - register as admin";

pub async fn show(
    term: &Term,
    client: &AuthClient,
    store: &dyn SessionStore,
    guard: &SubmitGuard,
) -> Result<Route> {
    println!();
    println!("{}", "Create account".bright_cyan().bold());

    // Independent of the session gate; a failed fetch still leaves
    // registration usable with an empty candidate list.
    println!("{}", "Loading parent accounts...".dimmed());
    let candidates = match client.fetch_parent_candidates().await {
        Ok(candidates) => candidates,
        Err(err) => {
            println!("{} {}", "Could not load parent accounts:".bright_red(), err);
            println!(
                "{}",
                "Continuing without a parent; the account will register as admin.".dimmed()
            );
            Vec::new()
        }
    };

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Full name")
        .allow_empty(true)
        .interact_text()?;
    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Email")
        .allow_empty(true)
        .interact_text()?;
    let phone: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Phone")
        .allow_empty(true)
        .interact_text()?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;

    if let Some(missing) = first_missing_field(&name, &email, &phone, &password) {
        println!("{} {missing} is required.", "Incomplete form:".bright_red());
        return Ok(Route::SignUp);
    }

    let labels: Vec<String> = std::iter::once(REGISTER_AS_ADMIN.to_string())
        .chain(candidates.iter().map(parent_label))
        .collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Parent account")
        .items(&labels)
        .default(0)
        .interact_on(term)?;
    let selected = (choice > 0).then(|| candidates[choice - 1].id.as_str());

    let resolution = resolve_tier(selected, &candidates);

    // One submission in flight per form; the permit re-arms the guard on
    // every exit path when it drops.
    let Some(_permit) = guard.begin() else {
        println!("{}", "A submission is already in progress.".dimmed());
        return Ok(Route::SignUp);
    };

    println!("{}", "Submitting registration...".dimmed());
    let request = SignupRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        phone: phone.trim().to_string(),
        password,
        tier: resolution.tier,
        parent_id: resolution.parent_id,
    };

    match client.signup(&request).await {
        Ok(outcome) => {
            establish_session(store, &outcome.user.id, &outcome.role);
            println!("{}", "Account created.".bright_green());
            Ok(Route::Home)
        }
        Err(err) => {
            // Inline failure; back to an editable form.
            println!("{} {}", "Registration failed:".bright_red(), err);
            Ok(Route::SignUp)
        }
    }
}

fn first_missing_field(
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
) -> Option<&'static str> {
    if name.trim().is_empty() {
        Some("Full name")
    } else if email.trim().is_empty() {
        Some("Email")
    } else if phone.trim().is_empty() {
        Some("Phone")
    } else if password.is_empty() {
        Some("Password")
    } else {
        None
    }
}

fn parent_label(candidate: &ParentCandidate) -> String {
    format!("{} - ({})", candidate.name, candidate.tier)
}
