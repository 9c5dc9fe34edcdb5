use crate::common::error::AppError;
use crate::middleware::auth::bearer_token;
use crate::modules::auth::token::{self, KeyTier};
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

/// Requires a token signed with the admin key that also carries the admin flag.
/// A bad signature, an expired token and a missing flag all get the same 403.
pub async fn admin_guard(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| AppError::Unauthorized("Missing or invalid token".to_string()))?;

    let claims = match token::verify(&state.config, token, KeyTier::Admin) {
        Ok(claims) if claims.is_admin => claims,
        _ => {
            warn!("Rejected admin request to {}", req.uri().path());
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }
    };

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
