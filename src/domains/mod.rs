// Domain modules
pub mod admin;
pub mod auth;
pub mod chirps;
