// All repositories module
pub mod auth;
pub mod chirps;
pub mod memory;

// Re-export all repositories for convenience
pub use auth::*;
pub use chirps::*;
pub use memory::*;
