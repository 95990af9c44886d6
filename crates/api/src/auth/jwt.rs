//! Signed access tokens.
//!
//! Tokens are HS256 JWTs carrying [`Claims`]. There is no refresh flow:
//! a client whose token has expired logs in again.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::errors::Error as JwtError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use studybuddy_core::types::DbId;
use uuid::Uuid;

use crate::config::env_or;

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 30;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Id of the authenticated user, as a decimal string.
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    /// Random per-token id.
    pub jti: String,
}

impl Claims {
    fn issue(user_id: DbId, issued_at: DateTime<Utc>, lifetime: TimeDelta) -> Self {
        Self {
            sub: user_id.to_string(),
            exp: (issued_at + lifetime).timestamp(),
            iat: issued_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// The user id in `sub`, or `None` if it is not a valid id.
    pub fn user_id(&self) -> Option<DbId> {
        self.sub.parse().ok()
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HMAC secret.
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    /// Reads `JWT_SECRET` (required) and `JWT_ACCESS_EXPIRY_MINS` (default 30).
    ///
    /// # Panics
    ///
    /// Panics if the secret is missing or blank.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.trim().is_empty(), "JWT_SECRET must be set and non-empty");

        Self {
            secret,
            access_token_expiry_mins: env_or("JWT_ACCESS_EXPIRY_MINS", DEFAULT_ACCESS_EXPIRY_MINS),
        }
    }

    fn lifetime(&self) -> TimeDelta {
        TimeDelta::minutes(self.access_token_expiry_mins)
    }

    /// Token lifetime in seconds, as reported in the login response.
    pub fn expires_in_secs(&self) -> i64 {
        self.lifetime().num_seconds()
    }

    fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.secret.as_bytes())
    }

    fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.secret.as_bytes())
    }
}

/// Issue an access token for `user_id`, valid from now.
pub fn generate_access_token(user_id: DbId, config: &JwtConfig) -> Result<String, JwtError> {
    let claims = Claims::issue(user_id, Utc::now(), config.lifetime());
    encode(&Header::default(), &claims, &config.encoding_key())
}

/// Check signature and expiry, returning the claims of a valid token.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, JwtError> {
    decode::<Claims>(token, &config.decoding_key(), &Validation::default())
        .map(|data| data.claims)
}
