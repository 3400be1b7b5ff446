// Chirps domain services
pub mod chirp_service;
pub mod state;

pub use chirp_service::*;
pub use state::*;
