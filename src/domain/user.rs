//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    pub fn new(id: i32, name: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// User display name
    #[schema(example = "Ann Example")]
    pub name: String,
    /// User email address
    #[schema(example = "ann@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_never_carries_the_password_hash() {
        let user = User::new(
            1,
            "Ann".to_string(),
            "ann@example.com".to_string(),
            "$argon2id$hash".to_string(),
        );
        let body = serde_json::to_value(UserResponse::from(user.clone())).unwrap();
        assert_eq!(body["id"], 1);
        assert_eq!(body["email"], "ann@example.com");
        assert!(body.get("password_hash").is_none());

        // Serializing the domain entity itself also skips the hash
        let raw = serde_json::to_value(&user).unwrap();
        assert!(raw.get("password_hash").is_none());
    }
}
