//! Typed representation of a profile response.
//!
//! The API returns one account plus a `children` array whose element shape
//! depends on the root's role: an admin's children wrap a sub-admin subtree
//! under a `sub-admin` key, a sub-admin's children are plain user accounts,
//! and everything else is a leaf. Malformed entries are skipped one at a
//! time so a single bad record never takes down the whole page.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::role::Role;

/// Key an admin's child entries use to wrap their sub-admin subtree.
const WRAPPER_KEY: &str = "sub-admin";

/// Any member of the hierarchy.
///
/// `role` keeps the raw wire tag so accounts with an unrecognized tier stay
/// displayable; use [`Role::from_tag`] when the tier matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
}

/// A sub-admin together with the users it manages. Owned exclusively by the
/// admin tree it was parsed out of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubAdminNode {
    pub account: Account,
    pub users: Vec<Account>,
}

/// Children of a profile root, discriminated by the root's role so the
/// composer can match exhaustively instead of probing for wrapper keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Children {
    /// Root is an admin: one node per well-formed wrapper entry, in order.
    SubAdmins(Vec<SubAdminNode>),
    /// Root is a sub-admin: its user accounts, in order.
    Users(Vec<Account>),
    /// Root is a user or carries an unrecognized role tag.
    None,
}

/// A parsed profile response. Read-only input to the view composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTree {
    pub root: Account,
    pub children: Children,
}

impl ProfileTree {
    /// The root's tier, if its tag is recognized.
    pub fn role(&self) -> Option<Role> {
        Role::from_tag(&self.root.role)
    }
}

/// Fatal problems with the profile payload. Anything below the root is
/// handled by skipping the offending entry instead.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("profile response is not a JSON object")]
    NotAnObject,
    #[error("profile response has no identifier")]
    MissingId,
}

/// Parse a raw profile response into a [`ProfileTree`].
///
/// Only a root that is not an object or has no `_id` is an error. An
/// unrecognized root role degrades to a leaf, and malformed child entries
/// are dropped with a warning while their siblings survive.
pub fn parse_profile(raw: &Value) -> Result<ProfileTree, ParseError> {
    let obj = raw.as_object().ok_or(ParseError::NotAnObject)?;
    let root = parse_account(obj).ok_or(ParseError::MissingId)?;

    let children = match Role::from_tag(&root.role) {
        Some(Role::Admin) => Children::SubAdmins(parse_sub_admins(obj.get("children"))),
        Some(Role::SubAdmin) => Children::Users(parse_users(obj.get("children"))),
        Some(Role::User) | None => Children::None,
    };

    Ok(ProfileTree { root, children })
}

/// An account needs at least its `_id`; every other field degrades.
fn parse_account(obj: &Map<String, Value>) -> Option<Account> {
    let id = obj.get("_id")?.as_str()?.to_string();
    Some(Account {
        id,
        name: string_field(obj, "name"),
        email: string_field(obj, "email"),
        phone: obj
            .get("phone")
            .and_then(Value::as_str)
            .map(str::to_string),
        role: string_field(obj, "role"),
    })
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn parse_sub_admins(children: Option<&Value>) -> Vec<SubAdminNode> {
    let Some(entries) = children.and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let Some(inner) = entry
                .as_object()
                .and_then(|o| o.get(WRAPPER_KEY))
                .and_then(Value::as_object)
            else {
                tracing::warn!("skipping admin child entry without a sub-admin wrapper");
                return None;
            };
            let Some(account) = parse_account(inner) else {
                tracing::warn!("skipping sub-admin entry with no identifier");
                return None;
            };
            Some(SubAdminNode {
                account,
                users: parse_users(inner.get("children")),
            })
        })
        .collect()
}

fn parse_users(children: Option<&Value>) -> Vec<Account> {
    let Some(entries) = children.and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let Some(obj) = entry.as_object() else {
                tracing::warn!("skipping non-object entry in user list");
                return None;
            };
            if obj.contains_key(WRAPPER_KEY) {
                tracing::warn!("skipping wrapper entry in user list");
                return None;
            }
            let account = parse_account(obj);
            if account.is_none() {
                tracing::warn!("skipping user entry with no identifier");
            }
            account
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_admin_tree() {
        let raw = json!({
            "_id": "a1",
            "role": "admin",
            "name": "Ada",
            "email": "a@x.com",
            "phone": "111",
            "children": [
                {
                    "sub-admin": {
                        "_id": "s1",
                        "role": "sub-admin",
                        "name": "Sam",
                        "email": "s@x.com",
                        "children": [
                            { "_id": "u1", "role": "user", "name": "Uma", "email": "u@x.com" }
                        ]
                    }
                }
            ]
        });

        let tree = parse_profile(&raw).unwrap();
        assert_eq!(tree.root.id, "a1");
        assert_eq!(tree.root.phone.as_deref(), Some("111"));
        assert_eq!(tree.role(), Some(Role::Admin));

        let Children::SubAdmins(nodes) = &tree.children else {
            panic!("admin root must parse to sub-admin children");
        };
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].account.name, "Sam");
        assert_eq!(nodes[0].users.len(), 1);
        assert_eq!(nodes[0].users[0].name, "Uma");
    }

    #[test]
    fn skips_malformed_admin_children_keeping_siblings() {
        let raw = json!({
            "_id": "a1",
            "role": "admin",
            "children": [
                { "not-a-wrapper": {} },
                { "sub-admin": { "name": "no id" } },
                { "sub-admin": { "_id": "s2", "name": "Sue", "email": "sue@x.com" } },
                "garbage"
            ]
        });

        let tree = parse_profile(&raw).unwrap();
        let Children::SubAdmins(nodes) = &tree.children else {
            panic!("admin root must parse to sub-admin children");
        };
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].account.id, "s2");
        assert!(nodes[0].users.is_empty());
    }

    #[test]
    fn parses_sub_admin_tree_and_skips_wrapper_entries() {
        let raw = json!({
            "_id": "s1",
            "role": "sub-admin",
            "name": "Sam",
            "email": "s@x.com",
            "children": [
                { "_id": "u1", "role": "user", "name": "Uma", "email": "u@x.com" },
                { "sub-admin": { "_id": "nested" } },
                { "_id": "u2", "role": "user", "name": "Ed", "email": "e@x.com" }
            ]
        });

        let tree = parse_profile(&raw).unwrap();
        let Children::Users(users) = &tree.children else {
            panic!("sub-admin root must parse to user children");
        };
        let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u2"]);
    }

    #[test]
    fn user_root_is_a_leaf() {
        let raw = json!({ "_id": "u1", "role": "user", "name": "Uma", "email": "u@x.com" });
        let tree = parse_profile(&raw).unwrap();
        assert_eq!(tree.children, Children::None);
    }

    #[test]
    fn unknown_role_degrades_to_leaf() {
        let raw = json!({
            "_id": "x1",
            "role": "superuser",
            "name": "X",
            "email": "x@x.com",
            "children": [{ "_id": "u1" }]
        });

        let tree = parse_profile(&raw).unwrap();
        assert_eq!(tree.role(), None);
        assert_eq!(tree.root.role, "superuser");
        assert_eq!(tree.children, Children::None);
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let raw = json!({ "_id": "a1", "role": "admin" });
        let tree = parse_profile(&raw).unwrap();
        assert_eq!(tree.root.name, "");
        assert_eq!(tree.root.email, "");
        assert_eq!(tree.root.phone, None);
        assert_eq!(tree.children, Children::SubAdmins(Vec::new()));
    }

    #[test]
    fn rejects_roots_without_identity() {
        assert!(matches!(
            parse_profile(&json!([1, 2, 3])),
            Err(ParseError::NotAnObject)
        ));
        assert!(matches!(
            parse_profile(&json!({ "role": "admin" })),
            Err(ParseError::MissingId)
        ));
    }
}
