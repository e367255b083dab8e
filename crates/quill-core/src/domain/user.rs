use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RecordStatus;
use crate::error::DomainError;

/// User entity - an identity in the system.
///
/// `password_hash` only ever holds the salted hash; plaintext passwords are
/// hashed before the entity is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with generated ID and timestamps.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            status: RecordStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check the required sign-up fields before any hashing or persistence.
    pub fn validate_sign_up(email: &str, password: &str, name: &str) -> Result<(), DomainError> {
        if email.is_empty() || password.is_empty() || name.is_empty() {
            return Err(DomainError::Validation(
                "email, password and name are required".to_string(),
            ));
        }
        if !is_valid_email(email) {
            return Err(DomainError::Validation("Invalid email format".to_string()));
        }
        Ok(())
    }
}

/// Simple email shape check: non-whitespace local part, `@`, and a domain
/// containing a dot.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_active() {
        let user = User::new(
            "jane@example.com".to_string(),
            "Jane".to_string(),
            "$argon2id$stub".to_string(),
        );
        assert!(user.status.is_active());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("j.doe@mail.example.org"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane doe@example.com"));
    }

    #[test]
    fn test_validate_sign_up_requires_all_fields() {
        assert!(User::validate_sign_up("jane@example.com", "secret", "Jane").is_ok());
        assert!(User::validate_sign_up("", "secret", "Jane").is_err());
        assert!(User::validate_sign_up("jane@example.com", "", "Jane").is_err());
        assert!(User::validate_sign_up("jane@example.com", "secret", "").is_err());
        assert!(User::validate_sign_up("not-an-email", "secret", "Jane").is_err());
    }
}
