//! # IssueTrack API Server Library
//!
//! This library provides the core functionality for the IssueTrack API server.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers
//! - `services`: Business logic orchestration

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod services;
