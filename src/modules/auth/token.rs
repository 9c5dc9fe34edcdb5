use crate::common::error::AppError;
use crate::config::settings::AppConfig;
use anyhow::anyhow;
use jsonwebtoken::{decode, encode, get_current_timestamp, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::Duration;

/// Signing key selector. User and admin tokens are signed with different secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTier {
    User,
    Admin,
}

impl KeyTier {
    pub fn default_ttl(&self) -> Duration {
        match self {
            KeyTier::User => Duration::days(7),
            KeyTier::Admin => Duration::hours(12),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenClaims {
    pub sub: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_admin: bool,
    pub exp: usize,
    pub iat: usize,
}

pub fn issue(
    config: &AppConfig,
    user_id: i64,
    username: &str,
    is_admin: bool,
    tier: KeyTier,
    ttl: Duration,
) -> Result<String, AppError> {
    let now = get_current_timestamp() as i64;
    let claims = TokenClaims {
        sub: user_id,
        username: username.to_string(),
        is_admin,
        exp: (now + ttl.whole_seconds()).max(0) as usize,
        iat: now as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret(tier)),
    )
    .map_err(|e| AppError::Internal(anyhow!("Failed to sign token: {}", e)))
}

pub fn verify(config: &AppConfig, token: &str, tier: KeyTier) -> Result<TokenClaims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret(tier)),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))
}
