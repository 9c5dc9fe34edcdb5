use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    DatabaseUrl,
    JwtSecret,
    AdminJwtSecret,
    AdminPassword,
    PublicDir,
    UploadDir,
    MaxUploadMb,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::DatabaseUrl => "DATABASE_URL",
            EnvKey::JwtSecret => "JWT_SECRET",
            EnvKey::AdminJwtSecret => "ADMIN_JWT_SECRET",
            EnvKey::AdminPassword => "ADMIN_PASSWORD",
            EnvKey::PublicDir => "PUBLIC_DIR",
            EnvKey::UploadDir => "UPLOAD_DIR",
            EnvKey::MaxUploadMb => "MAX_UPLOAD_MB",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
