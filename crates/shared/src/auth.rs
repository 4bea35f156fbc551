//! Authentication types for JWT claims and auth endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// JWT claims shared by access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username).
    pub sub: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user.
    #[must_use]
    pub fn new(username: &str, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: username.to_string(),
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the username the token was issued for.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.sub
    }
}

/// Signup request payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    /// Desired username.
    #[validate(length(min = 5, max = 50, message = "username must be 5-50 characters"))]
    pub username: String,
    /// User email.
    #[validate(
        email(message = "email is not valid"),
        length(max = 50, message = "email must be at most 50 characters")
    )]
    pub email: String,
    /// Plaintext password, hashed before storage.
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    /// Optional monthly net income.
    pub net_income: Option<Decimal>,
}

/// Login request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Refresh token request.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshRequest {
    /// The refresh token.
    pub refresh_token: String,
}

/// Update net income request.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateIncomeRequest {
    /// New monthly net income; `None` clears it.
    pub net_income: Option<Decimal>,
}

/// Token pair returned after successful login or refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Access token (short-lived).
    pub access_token: String,
    /// Refresh token (long-lived, single active per user).
    pub refresh_token: String,
    /// Token type, always `bearer`.
    pub token_type: String,
    /// Access token expiration in seconds.
    pub expires_in: i64,
}

impl TokenResponse {
    /// Creates a bearer token response.
    #[must_use]
    pub fn bearer(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "bearer".to_string(),
            expires_in,
        }
    }
}

/// User profile returned by auth and profile endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// Monthly net income, if set.
    pub net_income: Option<Decimal>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignupRequest {
        SignupRequest {
            username: "alice_w".to_string(),
            email: "alice@example.com".to_string(),
            password: "correct-horse".to_string(),
            net_income: None,
        }
    }

    #[test]
    fn test_signup_validation_accepts_valid_payload() {
        assert!(valid_signup().validate().is_ok());
    }

    #[test]
    fn test_signup_validation_rejects_short_username() {
        let payload = SignupRequest {
            username: "al".to_string(),
            ..valid_signup()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_signup_validation_rejects_bad_email() {
        let payload = SignupRequest {
            email: "not-an-email".to_string(),
            ..valid_signup()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_signup_validation_rejects_short_password() {
        let payload = SignupRequest {
            password: "short".to_string(),
            ..valid_signup()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_token_response_is_bearer() {
        let resp = TokenResponse::bearer("a".into(), "r".into(), 1800);
        assert_eq!(resp.token_type, "bearer");
        assert_eq!(resp.expires_in, 1800);
    }
}
