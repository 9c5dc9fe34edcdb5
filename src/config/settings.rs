use crate::config::env::{self, EnvKey};
use crate::modules::auth::token::KeyTier;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("JWT_SECRET and ADMIN_JWT_SECRET must be different")]
    SharedSecret,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub admin_jwt_secret: String,
    pub admin_password: Option<String>,
    pub public_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let jwt_secret = required(EnvKey::JwtSecret)?;
        let admin_jwt_secret = required(EnvKey::AdminJwtSecret)?;
        if jwt_secret == admin_jwt_secret {
            return Err(ConfigError::SharedSecret);
        }

        let max_upload_mb: usize = env::get_parsed(EnvKey::MaxUploadMb, 20);

        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            database_url: env::get_or(EnvKey::DatabaseUrl, "sqlite://database/stream.db"),
            jwt_secret,
            admin_jwt_secret,
            admin_password: env::get(EnvKey::AdminPassword).ok(),
            public_dir: PathBuf::from(env::get_or(EnvKey::PublicDir, "public")),
            upload_dir: PathBuf::from(env::get_or(EnvKey::UploadDir, "public/uploads")),
            max_upload_bytes: max_upload_mb * 1024 * 1024,
        })
    }

    /// Signing secret for the given token tier. The two tiers never share a key.
    pub fn secret(&self, tier: KeyTier) -> &[u8] {
        match tier {
            KeyTier::User => self.jwt_secret.as_bytes(),
            KeyTier::Admin => self.admin_jwt_secret.as_bytes(),
        }
    }
}

fn required(key: EnvKey) -> Result<String, ConfigError> {
    let name = key.as_str();
    match env::get(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(name)),
    }
}
