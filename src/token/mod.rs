// Public API - what other modules can use
pub use claims::TokenClaims;
pub use config::TokenConfig;
pub use issuer::issue;
pub use validator::validate;

// Internal modules
mod claims;
mod config;
mod issuer;
mod validator;
