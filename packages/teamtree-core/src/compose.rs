//! Projection of a [`ProfileTree`] into renderable sections.
//!
//! Pure and deterministic: the same tree always produces the same section
//! sequence, which is what makes the page testable without a terminal.

use crate::model::{Account, Children, ProfileTree};

/// One sub-admin row in an admin's roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubAdminEntry {
    pub account: Account,
    /// Number of users this sub-admin manages. Zero is a valid roster row.
    pub managed_count: usize,
    pub users: Vec<Account>,
}

/// A renderable section of the profile page, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// The signed-in account's own card. Always first.
    OwnProfile(Account),
    /// Admin view: one entry per sub-admin, input order preserved.
    SubAdminRoster(Vec<SubAdminEntry>),
    /// Sub-admin view: managed users, input order preserved, untransformed.
    UserRoster(Vec<Account>),
    /// Leaf accounts have nothing further to show.
    Empty,
}

/// Decide which sections the page renders for this tree.
///
/// The `Children` discriminant carries the role decision made at parse
/// time, so the match here is exhaustive by construction.
pub fn compose_sections(tree: &ProfileTree) -> Vec<Section> {
    let mut sections = vec![Section::OwnProfile(tree.root.clone())];

    match &tree.children {
        Children::SubAdmins(nodes) => {
            let entries = nodes
                .iter()
                .map(|node| SubAdminEntry {
                    account: node.account.clone(),
                    managed_count: node.users.len(),
                    users: node.users.clone(),
                })
                .collect();
            sections.push(Section::SubAdminRoster(entries));
        }
        Children::Users(users) => sections.push(Section::UserRoster(users.clone())),
        Children::None => sections.push(Section::Empty),
    }

    sections
}
