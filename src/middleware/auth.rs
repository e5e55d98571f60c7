use crate::error::AppError;
use crate::security::jwt;
use uuid::Uuid;

/// Middleware to extract the bearer credential and add the caller's user id
/// to request extensions. Handlers must never trust client-supplied identity;
/// this is the only source of `caller_id`.
pub async fn auth_middleware(
    mut req: axum::extract::Request,
    next: axum::middleware::Next,
) -> Result<axum::response::Response, AppError> {
    // Extract Authorization header
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    // Parse Bearer token
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    // Verify JWT and extract claims
    let token_data = jwt::validate_token(token)?;

    // Parse user_id from claims.sub (should be a UUID)
    let user_id = Uuid::parse_str(&token_data.claims.sub)
        .map_err(|_| AppError::BadRequest("invalid user id in token".into()))?;

    // Add user_id to request extensions
    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}
