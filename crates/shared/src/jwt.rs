//! JWT token generation and validation.
//!
//! Issues short-lived access tokens and longer-lived refresh tokens, both
//! signed with a shared secret and a configurable HMAC algorithm.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Deserialize;
use thiserror::Error;

use crate::auth::Claims;

/// JWT configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Signing algorithm name (HS256, HS384, or HS512).
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Access token expiration in minutes.
    #[serde(default = "default_access_minutes")]
    pub access_token_expires_minutes: i64,
    /// Refresh token expiration in days.
    #[serde(default = "default_refresh_days")]
    pub refresh_token_expires_days: i64,
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_minutes() -> i64 {
    30
}

fn default_refresh_days() -> i64 {
    7
}

/// Errors that can occur during JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    /// The configured algorithm is unknown or not an HMAC algorithm.
    #[error("unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    EncodingError(String),

    /// Token decoding failed.
    #[error("failed to decode token: {0}")]
    DecodingError(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,
}

/// JWT service for token operations.
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("algorithm", &self.algorithm)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish_non_exhaustive()
    }
}

impl JwtService {
    /// Creates a new JWT service with the given configuration.
    ///
    /// Only shared-secret (HMAC) algorithms are accepted.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::UnsupportedAlgorithm` if the configured algorithm
    /// name is unknown or is not HS256/HS384/HS512.
    pub fn new(config: JwtConfig) -> Result<Self, JwtError> {
        let algorithm = config
            .algorithm
            .parse::<Algorithm>()
            .map_err(|_| JwtError::UnsupportedAlgorithm(config.algorithm.clone()))?;

        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(JwtError::UnsupportedAlgorithm(config.algorithm.clone()));
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Ok(Self {
            config,
            algorithm,
            encoding_key,
            decoding_key,
        })
    }

    /// Generates an access token for a user.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails.
    pub fn generate_access_token(&self, username: &str) -> Result<String, JwtError> {
        let expires_at = Utc::now() + Duration::minutes(self.config.access_token_expires_minutes);
        let claims = Claims::new(username, expires_at);

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }

    /// Generates a refresh token for a user.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails.
    pub fn generate_refresh_token(&self, username: &str) -> Result<String, JwtError> {
        let expires_at = Utc::now() + Duration::days(self.config.refresh_token_expires_days);
        let claims = Claims::new(username, expires_at);

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }

    /// Validates and decodes a token.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Expired` if the token has expired.
    /// Returns `JwtError::DecodingError` if the token is malformed, carries
    /// a bad signature, or was signed with a different algorithm.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let validation = Validation::new(self.algorithm);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::DecodingError(e.to_string()),
            })
    }

    /// Returns the access token expiration in seconds.
    #[must_use]
    pub const fn access_token_expires_in(&self) -> i64 {
        self.config.access_token_expires_minutes * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            algorithm: "HS256".to_string(),
            access_token_expires_minutes: 30,
            refresh_token_expires_days: 7,
        }
    }

    fn create_test_service() -> JwtService {
        JwtService::new(test_config()).unwrap()
    }

    #[test]
    fn test_generate_and_validate_access_token() {
        let service = create_test_service();

        let token = service.generate_access_token("alice").unwrap();
        assert!(!token.is_empty());

        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_refresh_token_lives_longer_than_access_token() {
        let service = create_test_service();

        let access = service.generate_access_token("alice").unwrap();
        let refresh = service.generate_refresh_token("alice").unwrap();

        let access_claims = service.validate_token(&access).unwrap();
        let refresh_claims = service.validate_token(&refresh).unwrap();
        assert!(refresh_claims.exp > access_claims.exp);
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();
        let result = service.validate_token("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingError(_))));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative TTL puts exp well past the decoder's default leeway.
        let service = JwtService::new(JwtConfig {
            access_token_expires_minutes: -5,
            ..test_config()
        })
        .unwrap();

        let token = service.generate_access_token("alice").unwrap();
        let result = service.validate_token(&token);
        assert!(matches!(result, Err(JwtError::Expired)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = create_test_service();
        let other = JwtService::new(JwtConfig {
            secret: "a-completely-different-secret".to_string(),
            ..test_config()
        })
        .unwrap();

        let token = service.generate_access_token("alice").unwrap();
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_unsupported_algorithm() {
        let result = JwtService::new(JwtConfig {
            algorithm: "RS256".to_string(),
            ..test_config()
        });
        assert!(matches!(result, Err(JwtError::UnsupportedAlgorithm(_))));

        let result = JwtService::new(JwtConfig {
            algorithm: "HS257".to_string(),
            ..test_config()
        });
        assert!(matches!(result, Err(JwtError::UnsupportedAlgorithm(_))));
    }
}
