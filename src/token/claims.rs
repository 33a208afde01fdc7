use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Seconds after issuance before a token becomes valid.
pub const NOT_BEFORE_SECS: i64 = 2;
/// Seconds after issuance at which a token expires.
pub const EXPIRES_SECS: i64 = 5;

/// JWT claims carried by an issued token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    /// Opaque caller-supplied payload, returned verbatim on validation
    pub data: String,
    pub exp: usize, // Expiration timestamp (standard JWT claim)
    pub nbf: usize, // Not-before timestamp (standard JWT claim)
}

impl TokenClaims {
    /// Builds claims for `data` issued at the current time: usable from
    /// two seconds after issuance until five seconds after issuance.
    pub fn issue_now(data: String) -> Self {
        let now = Utc::now().timestamp();

        Self {
            data,
            exp: (now + EXPIRES_SECS) as usize,
            nbf: (now + NOT_BEFORE_SECS) as usize,
        }
    }
}
