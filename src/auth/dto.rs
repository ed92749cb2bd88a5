use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::{email, length_between, FieldError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), FieldError> {
        length_between("name", &self.name, 3, 50)?;
        length_between("email", &self.email, 3, 255)?;
        email("email", &self.email)?;
        length_between("password", &self.password, 8, 255)?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), FieldError> {
        length_between("email", &self.email, 3, 255)?;
        email("email", &self.email)?;
        length_between("password", &self.password, 8, 255)?;
        Ok(())
    }
}

/// User representation safe to return to clients; never carries the hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn accepts_valid_registration() {
        assert!(register("Vu Nam", "vu@example.com", "password123").validate().is_ok());
    }

    #[test]
    fn name_bounds_are_inclusive() {
        assert!(register("abc", "vu@example.com", "password123").validate().is_ok());
        assert!(register("ab", "vu@example.com", "password123").validate().is_err());
        assert!(register(&"a".repeat(50), "vu@example.com", "password123").validate().is_ok());
        assert!(register(&"a".repeat(51), "vu@example.com", "password123").validate().is_err());
    }

    #[test]
    fn rejects_short_password() {
        let err = register("Vu Nam", "vu@example.com", "1234567").validate().unwrap_err();
        assert_eq!(err.field, "password");
    }

    #[test]
    fn rejects_malformed_email() {
        let err = register("Vu Nam", "nope", "password123").validate().unwrap_err();
        assert_eq!(err.field, "email");
    }
}
