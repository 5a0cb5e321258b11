//! Роль текущего пользователя.
//!
//! Роль хранится в localStorage под ключом `rol` и выставляется страницей
//! входа, которая находится вне этого приложения. Здесь только чтение.

use serde::{Deserialize, Serialize};

pub const ROLE_STORAGE_KEY: &str = "rol";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// `"1"`
    Validator,
    /// `"2"`
    Operator,
    /// Anything else, including a missing key
    Guest,
}

impl Role {
    pub fn from_storage(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("1") => Role::Validator,
            Some("2") => Role::Operator,
            _ => Role::Guest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Validator => "validator",
            Role::Operator => "operator",
            Role::Guest => "guest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
}

impl Session {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn from_storage(value: Option<&str>) -> Self {
        Self::new(Role::from_storage(value))
    }

    /// Operators get a link back home instead of the add button
    pub fn can_create_warehouse(&self) -> bool {
        self.role != Role::Operator
    }

    /// Only validators may open the suppliers page
    pub fn can_access_suppliers(&self) -> bool {
        self.role == Role::Validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_storage() {
        assert_eq!(Role::from_storage(Some("1")), Role::Validator);
        assert_eq!(Role::from_storage(Some("2")), Role::Operator);
        assert_eq!(Role::from_storage(Some("3")), Role::Guest);
        assert_eq!(Role::from_storage(Some("")), Role::Guest);
        assert_eq!(Role::from_storage(None), Role::Guest);
    }

    #[test]
    fn test_permissions() {
        let validator = Session::from_storage(Some("1"));
        assert!(validator.can_create_warehouse());
        assert!(validator.can_access_suppliers());

        let operator = Session::from_storage(Some("2"));
        assert!(!operator.can_create_warehouse());
        assert!(!operator.can_access_suppliers());

        let guest = Session::from_storage(None);
        assert!(guest.can_create_warehouse());
        assert!(!guest.can_access_suppliers());
    }
}
