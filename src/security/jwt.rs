//! Bearer-token validation for the session verifier.
//!
//! The service only validates tokens; issuance belongs to the auth
//! collaborator, which signs with the shared `JWT_SECRET` (HS256). The
//! decoding key is loaded once at startup and immutable thereafter.

use crate::error::AppError;
use jsonwebtoken::{decode, Algorithm, DecodingKey, TokenData, Validation};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// Claims carried by the session credential
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

static JWT_DECODING_KEY: OnceCell<DecodingKey> = OnceCell::new();

/// Install the validation key. Must be called during startup before any
/// request is served; later calls are no-ops.
pub fn initialize_validation(secret: &str) {
    let _ = JWT_DECODING_KEY.set(DecodingKey::from_secret(secret.as_bytes()));
}

/// Validate signature and expiry, returning the decoded claims.
pub fn validate_token(token: &str) -> Result<TokenData<Claims>, AppError> {
    let key = JWT_DECODING_KEY.get().ok_or(AppError::Unauthorized)?;
    decode::<Claims>(token, key, &Validation::new(JWT_ALGORITHM))
        .map_err(|_| AppError::Unauthorized)
}

#[cfg(test)]
pub const TEST_SECRET: &str = "dm-service-test-secret";

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn accepts_valid_token_and_rejects_bad_ones() {
        initialize_validation(TEST_SECRET);

        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "a9f0c1f2-0000-4000-8000-000000000001".into(),
            iat: now,
            exp: now + 3600,
        };

        let token = sign(&claims, TEST_SECRET);
        let decoded = validate_token(&token).unwrap();
        assert_eq!(decoded.claims.sub, claims.sub);

        // Wrong signing key
        let forged = sign(&claims, "some-other-secret");
        assert!(validate_token(&forged).is_err());

        // Expired (past the default leeway)
        let expired = Claims {
            exp: now - 3600,
            ..claims
        };
        assert!(validate_token(&sign(&expired, TEST_SECRET)).is_err());

        // Not a token at all
        assert!(validate_token("garbage").is_err());
    }
}
