//! Shared utilities and common types for the HomeStay server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Validation primitives (field checks, email pattern)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig};
pub use types::ErrorResponse;
pub use utils::validation;
