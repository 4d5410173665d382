//! Role Model

use serde::{Deserialize, Serialize};

/// Account role chosen at login; decides which top-level view is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Student/staff ordering food
    #[default]
    Customer,
    /// Restaurant partner managing the menu
    Restaurant,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Restaurant => "restaurant",
        }
    }

    pub fn is_partner(&self) -> bool {
        matches!(self, UserRole::Restaurant)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(
            serde_json::to_string(&UserRole::Restaurant).unwrap(),
            "\"restaurant\""
        );
        let role: UserRole = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(role, UserRole::Customer);
        assert!(!role.is_partner());
    }
}
