use serde::{Deserialize, Serialize};
use teamtree_core::Role;

/// Entry from `GET /api/auth/usertypes`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserTypeEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
}

/// Body for `POST /api/auth/signup`. `parent_id` serializes as a JSON
/// `null` when the account registers without a parent.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(rename = "type")]
    pub tier: Role,
    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,
}

/// Body for `POST /api/auth/signin`.
#[derive(Debug, Clone, Serialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// The account half of a successful signup/signin response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    #[serde(rename = "_id")]
    pub id: String,
}

/// Successful signup/signin response: the account and its role tag.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthOutcome {
    pub user: AuthUser,
    pub role: String,
}

/// Error body the API attaches to failed registrations.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_request_uses_wire_field_names() {
        let request = SignupRequest {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            phone: "111".to_string(),
            password: "secret".to_string(),
            tier: Role::SubAdmin,
            parent_id: Some("a1".to_string()),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "sub-admin");
        assert_eq!(value["parentId"], "a1");
    }

    #[test]
    fn parentless_signup_serializes_null_parent() {
        let request = SignupRequest {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            phone: "111".to_string(),
            password: "secret".to_string(),
            tier: Role::Admin,
            parent_id: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "admin");
        assert!(value["parentId"].is_null());
    }

    #[test]
    fn auth_outcome_reads_mongo_style_ids() {
        let outcome: AuthOutcome = serde_json::from_str(
            r#"{ "user": { "_id": "abc123", "name": "Ada" }, "role": "admin" }"#,
        )
        .unwrap();
        assert_eq!(outcome.user.id, "abc123");
        assert_eq!(outcome.role, "admin");
    }
}
