/// Business logic orchestration
///
/// Services sit between the HTTP routes and the database models. Each service
/// function runs the authorization check for its target resource before any
/// read or write, then delegates persistence to the model layer. Routes stay
/// thin: they parse and validate requests, call one service function, and
/// shape the response.
///
/// # Modules
///
/// - `auth`: Registration and login
/// - `project`: Project CRUD behind the ownership check
/// - `issue`: Issue CRUD behind the derived-ownership check

pub mod auth;
pub mod issue;
pub mod project;
