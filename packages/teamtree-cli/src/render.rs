//! Terminal rendering of composed profile sections.

use colored::Colorize;
use console::style;

use teamtree_core::{Account, Section, SubAdminEntry};

/// Print the composed sections in order.
pub fn sections(sections: &[Section]) {
    for section in sections {
        match section {
            Section::OwnProfile(account) => own_profile(account),
            Section::SubAdminRoster(entries) => sub_admin_roster(entries),
            Section::UserRoster(users) => user_roster(users),
            Section::Empty => {
                println!();
                println!("{}", "Nothing further to show.".dimmed());
            }
        }
    }
    println!();
}

fn own_profile(account: &Account) {
    println!();
    println!("{}", "Your Profile".bright_cyan().bold());
    field("Role", &account.role);
    field("Name", &account.name);
    field("Email", &account.email);
    if let Some(phone) = &account.phone {
        field("Phone", phone);
    }
}

fn sub_admin_roster(entries: &[SubAdminEntry]) {
    println!();
    println!("{}", "Your Sub-Admins".bright_cyan().bold());
    if entries.is_empty() {
        println!("  {}", "No sub-admins yet.".dimmed());
        return;
    }
    for entry in entries {
        println!("  {}", style(&entry.account.name).cyan().bold());
        if !entry.account.email.is_empty() {
            println!("    {}", style(&entry.account.email).dim());
        }
        println!(
            "    {}",
            style(format!("Manages {} users", entry.managed_count)).dim()
        );
        for user in &entry.users {
            user_line(user, 4);
        }
    }
}

fn user_roster(users: &[Account]) {
    println!();
    println!("{}", "Your Users".bright_cyan().bold());
    if users.is_empty() {
        println!("  {}", "No users yet.".dimmed());
        return;
    }
    for user in users {
        user_line(user, 2);
    }
}

fn user_line(user: &Account, indent: usize) {
    let pad = " ".repeat(indent);
    let mut line = format!("{} <{}>", user.name, user.email);
    if let Some(phone) = &user.phone {
        line.push_str(&format!("  {phone}"));
    }
    println!("{pad}{line}");
}

fn field(label: &str, value: &str) {
    println!("  {} {}", style(format!("{label}:")).yellow(), value);
}
