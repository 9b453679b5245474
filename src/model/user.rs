//! Account data exchanged with the auth API.

use super::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Token and profile returned by login and registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Profile fields a user may change. Unset fields are left alone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_uses_upper_case_wire_names() {
        let user: User = serde_json::from_value(json!({
            "id": "u1",
            "email": "ana@example.com",
            "firstName": "Ana",
            "lastName": "Gómez",
            "role": "ADMIN"
        }))
        .unwrap();

        assert!(user.is_admin());
        assert_eq!(user.full_name(), "Ana Gómez");
        assert_eq!(serde_json::to_value(Role::User).unwrap(), json!("USER"));
    }

    #[test]
    fn null_role_is_a_regular_user() {
        let user: User = serde_json::from_value(json!({
            "id": "u1",
            "email": "ana@example.com",
            "firstName": "Ana",
            "lastName": "Gómez",
            "role": null,
            "createdAt": "1704067200000"
        }))
        .unwrap();

        assert_eq!(user.role, Role::User);
        assert_eq!(user.created_at.as_deref(), Some("1704067200000"));
    }

    #[test]
    fn register_data_serializes_camel_case() {
        let data = RegisterData {
            first_name: "Ana".to_string(),
            last_name: "Gómez".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
        };

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["firstName"], "Ana");
        assert_eq!(value["lastName"], "Gómez");
    }

    #[test]
    fn profile_update_only_sends_changed_fields() {
        let update = ProfileUpdate {
            last_name: Some("Ruiz".to_string()),
            ..ProfileUpdate::default()
        };

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "lastName": "Ruiz" })
        );
    }
}
