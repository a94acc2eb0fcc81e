/// Authentication and authorization utilities
///
/// This module provides the security primitives for issuetrack:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: JWT access token generation and validation
/// - [`middleware`]: Bearer-token extraction and the authenticated-user context
/// - [`authorization`]: Ownership-chain checks for projects and issues
///
/// # Security Features
///
/// - **Password Hashing**: Argon2id with per-call random salts
/// - **JWT Tokens**: HS256 signing with a fixed default expiration
/// - **Ownership Enforcement**: Every project/issue access is checked against
///   the owning user before any data is returned or mutated

pub mod authorization;
pub mod jwt;
pub mod middleware;
pub mod password;
