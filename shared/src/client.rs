//! Client-related types shared between the core and the HTTP client
//!
//! Request/response bodies of the authentication endpoints.

use crate::models::UserRole;
use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    /// Only sent for restaurant partners
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
}

impl RegisterRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: UserRole,
        restaurant_name: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role,
            // The backend only records a restaurant name for partners
            restaurant_name: if role.is_partner() {
                restaurant_name
            } else {
                None
            },
        }
    }
}

/// Forgot-password request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Login / registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    pub token: String,
}

/// Generic `{ message }` body returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_drops_restaurant_name_for_customers() {
        let req = RegisterRequest::new(
            "Asha",
            "asha@campus.edu",
            "secret",
            UserRole::Customer,
            Some("Ignored".to_string()),
        );
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("restaurantName").is_none());

        let req = RegisterRequest::new(
            "Ravi",
            "ravi@campus.edu",
            "secret",
            UserRole::Restaurant,
            Some("Ravi's Kitchen".to_string()),
        );
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["restaurantName"], "Ravi's Kitchen");
        assert_eq!(json["role"], "restaurant");
    }

    #[test]
    fn test_auth_response_from_backend() {
        let json = r#"{"_id":"u1","name":"Asha","email":"a@b.c","role":"customer","token":"jwt"}"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.id, "u1");
        assert_eq!(resp.token, "jwt");
    }
}
