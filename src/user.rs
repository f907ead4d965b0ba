use std::fmt;
use std::str::FromStr;

use crate::error::InventoryError;

// Defines the privilege level of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Employee,
}

impl FromStr for Role {
    type Err = InventoryError;

    // Only the exact lowercase forms are accepted, matching registration input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "employee" => Ok(Role::Employee),
            other => Err(InventoryError::InvalidRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Employee => write!(f, "employee"),
        }
    }
}

//Represents a registered user of the inventory system.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl User {
    pub fn new(username: &str, password: &str, role: Role) -> Self {
        User {
            username: username.to_string(),
            password: password.to_string(),
            role,
        }
    }

    //Checks whether this user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User(username={}, role={})", self.username, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("admin", Role::Admin)]
    #[case("employee", Role::Employee)]
    fn parses_known_roles(#[case] input: &str, #[case] expected: Role) {
        assert_eq!(input.parse::<Role>().unwrap(), expected);
    }

    #[rstest]
    #[case("manager")]
    #[case("Admin")]
    #[case("")]
    fn rejects_unknown_roles(#[case] input: &str) {
        assert!(matches!(
            input.parse::<Role>(),
            Err(InventoryError::InvalidRole(_))
        ));
    }

    #[rstest]
    fn admin_check_follows_role() {
        assert!(User::new("root", "pw", Role::Admin).is_admin());
        assert!(!User::new("clerk", "pw", Role::Employee).is_admin());
    }
}
