//! # Issuetrack Shared Library
//!
//! This crate contains the shared types and business logic used by the
//! issuetrack API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models and CRUD operations (users, projects, issues)
//! - `auth`: Password hashing, JWT tokens, and the ownership authorization engine
//! - `db`: Connection pool management and migration runner

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the issuetrack shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
