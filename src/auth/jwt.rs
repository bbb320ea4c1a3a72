use crate::types::{AppError, Claims, Result, TokenResponse};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Token service for JWT issuance and validation.
///
/// Mints HS256-signed tokens carrying `{sub, iat, exp}` and verifies them
/// against the server-held secret. Tokens are never persisted: validity is
/// established purely by signature and expiry, so a compromised token stays
/// valid until it expires.
pub struct AuthService {
    jwt_secret: String,
    token_ttl: i64,
}

impl AuthService {
    /// Creates a new AuthService with the given configuration.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for signing JWTs (should be at least 32 chars)
    /// * `token_ttl` - Token validity in seconds
    pub fn new(jwt_secret: String, token_ttl: i64) -> Self {
        Self {
            jwt_secret,
            token_ttl,
        }
    }

    /// Issues a signed bearer token for a user.
    ///
    /// Called only after a successful credential check; the TTL is the
    /// fixed configured value, with no per-request override.
    pub fn issue_token(&self, user_id: &str) -> Result<TokenResponse> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + Duration::seconds(self.token_ttl)).timestamp() as usize,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        Ok(TokenResponse {
            token,
            token_type: "bearer".to_string(),
            expires_in: self.token_ttl,
        })
    }

    /// Verifies a token's signature and expiry and returns the claims.
    ///
    /// Expired and forged tokens both map to [`AppError::Unauthenticated`];
    /// the message text differs for usability, the status never does.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::Unauthenticated("Token expired".to_string())
            }
            _ => AppError::Unauthenticated("Invalid token".to_string()),
        })
    }
}
