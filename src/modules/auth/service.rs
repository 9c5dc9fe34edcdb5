use super::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use super::model::{User, UserRole};
use super::repository::AuthRepository;
use super::token::{self, KeyTier};
use crate::common::error::{is_unique_violation, AppError};
use crate::common::security;
use crate::state::AppState;
use tracing::{info, warn};
use validator::Validate;

/// Username of the seeded administrator account.
pub const ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

pub struct AuthService;

impl AuthService {
    pub async fn register(state: AppState, req: RegisterRequest) -> Result<AuthResponse, AppError> {
        req.validate()?;

        let password_hash = security::hash_password(&req.password)?;

        let user = AuthRepository::create_user(&state.db, &req.username, &password_hash, UserRole::User)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Validation("Username already exists".to_string())
                } else {
                    AppError::Storage(e)
                }
            })?;

        info!("Registered user id={} username={}", user.id, user.username);
        Self::issue_for(&state, user, KeyTier::User)
    }

    pub async fn login(state: AppState, req: LoginRequest) -> Result<AuthResponse, AppError> {
        req.validate()?;

        let user = Self::check_credentials(&state, &req.username, &req.password)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        Self::issue_for(&state, user, KeyTier::User)
    }

    pub async fn admin_login(state: AppState, req: LoginRequest) -> Result<AuthResponse, AppError> {
        req.validate()?;

        let candidate = AuthRepository::find_user_by_username(&state.db, &req.username).await?;
        let admin = match candidate {
            Some(user) if user.role == UserRole::Admin => user,
            _ => {
                warn!("Rejected admin login for username={}", req.username);
                return Err(AppError::Forbidden("Admin access denied".to_string()));
            }
        };

        if !security::verify_password(&req.password, &admin.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        info!("Admin login id={}", admin.id);
        Self::issue_for(&state, admin, KeyTier::Admin)
    }

    pub async fn me(state: AppState, user_id: i64) -> Result<UserResponse, AppError> {
        let user = AuthRepository::find_user_by_id(&state.db, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;
        Ok(user.into())
    }

    /// Creates the admin account on first start, or resets its password when one is configured.
    pub async fn ensure_admin_user(state: &AppState) -> Result<(), AppError> {
        let configured = state.config.admin_password.as_deref();

        if configured.is_none() && AuthRepository::admin_exists(&state.db).await? {
            return Ok(());
        }

        let password = match configured {
            Some(p) => p,
            None => {
                warn!("ADMIN_PASSWORD not set, seeding admin with the default password");
                DEFAULT_ADMIN_PASSWORD
            }
        };

        let hash = security::hash_password(password)?;
        AuthRepository::upsert_admin(&state.db, ADMIN_USERNAME, &hash).await?;
        info!("Admin user ready: username='{}'", ADMIN_USERNAME);
        Ok(())
    }

    /// Unknown user and wrong password are indistinguishable to the caller.
    async fn check_credentials(
        state: &AppState,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let Some(user) = AuthRepository::find_user_by_username(&state.db, username).await? else {
            security::verify_missing_account(password);
            return Ok(None);
        };

        if security::verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    fn issue_for(state: &AppState, user: User, tier: KeyTier) -> Result<AuthResponse, AppError> {
        let ttl = tier.default_ttl();
        let is_admin = tier == KeyTier::Admin && user.role == UserRole::Admin;
        let token = token::issue(&state.config, user.id, &user.username, is_admin, tier, ttl)?;

        Ok(AuthResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: ttl.whole_seconds(),
            user: user.into(),
        })
    }
}
