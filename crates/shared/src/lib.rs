//! Shared types, errors, and configuration for Spendtrack.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error taxonomy
//! - JWT token service
//! - Request/response payloads for the HTTP API
//! - Pagination types for list endpoints
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod expense;
pub mod jwt;
pub mod notification;
pub mod types;

pub use auth::Claims;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use jwt::{JwtConfig, JwtError, JwtService};
