// Shared module
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod services;

pub use database::*;
pub use errors::*;
pub use middleware::{get_bearer_token, AuthenticatedUser, JsonBody};
pub use services::*;
