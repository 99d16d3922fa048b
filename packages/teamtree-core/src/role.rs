use std::fmt;

use serde::{Deserialize, Serialize};

/// Position in the fixed three-level hierarchy.
///
/// Wire tags are `admin`, `sub-admin` and `user`. Tags outside this set are
/// never fatal anywhere in the client; accounts carrying one are treated as
/// leaves with nothing to manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    SubAdmin,
    User,
}

impl Role {
    /// Parse a wire tag. `None` for anything outside the three tiers.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "admin" => Some(Role::Admin),
            "sub-admin" => Some(Role::SubAdmin),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    /// The wire tag for this tier.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::SubAdmin => "sub-admin",
            Role::User => "user",
        }
    }

    /// Tier assigned to an account registered under a parent of this tier.
    ///
    /// `user` is the floor of the hierarchy: children of a user-tier parent
    /// stay `user` rather than introducing a fourth level.
    pub fn child_tier(&self) -> Role {
        match self {
            Role::Admin => Role::SubAdmin,
            Role::SubAdmin => Role::User,
            Role::User => Role::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        for role in [Role::Admin, Role::SubAdmin, Role::User] {
            assert_eq!(Role::from_tag(role.as_tag()), Some(role));
        }
        assert_eq!(Role::from_tag("superuser"), None);
        assert_eq!(Role::from_tag(""), None);
    }

    #[test]
    fn serde_uses_wire_tags() {
        assert_eq!(serde_json::to_string(&Role::SubAdmin).unwrap(), "\"sub-admin\"");
        let parsed: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, Role::Admin);
    }

    #[test]
    fn child_tier_steps_down_and_floors_at_user() {
        assert_eq!(Role::Admin.child_tier(), Role::SubAdmin);
        assert_eq!(Role::SubAdmin.child_tier(), Role::User);
        assert_eq!(Role::User.child_tier(), Role::User);
    }
}
