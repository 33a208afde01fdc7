// Library crate for the token gateway
// This file exposes the public API for integration tests

pub mod gateway;
pub mod harness;
pub mod router;
pub mod shared;
pub mod token;

// Re-export commonly used types for easier access in tests
pub use gateway::{Headers, Request, Response};
pub use shared::{AppError, AppState};
pub use token::{TokenClaims, TokenConfig};
