/// API route handlers
///
/// # Modules
///
/// - `health`: Health check endpoint
/// - `auth`: Registration and login
/// - `projects`: Project CRUD
/// - `issues`: Issue CRUD and per-project listing

pub mod auth;
pub mod health;
pub mod issues;
pub mod projects;
