//! HS256 token service.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Validity window of an issued credential.
const TOKEN_TTL_SECS: i64 = 3600;

/// Claims carried by a bearer credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject record id.
    pub sub: String,
    /// Subject display name.
    pub name: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Issues and verifies signed, time-limited bearer credentials.
///
/// Credentials are stateless: validity is determined purely by signature and
/// expiry, so nothing issued here can be revoked before it expires.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Build a service around a shared signing secret.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; no clock-skew leeway.
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a credential for a subject, expiring one hour from now.
    pub fn issue(&self, subject_id: &str, subject_name: &str) -> AuthResult<String> {
        self.issue_expiring_at(
            subject_id,
            subject_name,
            Utc::now() + Duration::seconds(TOKEN_TTL_SECS),
        )
    }

    /// Issue a credential with an explicit expiry timestamp.
    pub fn issue_expiring_at(
        &self,
        subject_id: &str,
        subject_name: &str,
        expires_at: DateTime<Utc>,
    ) -> AuthResult<String> {
        let claims = Claims {
            sub: subject_id.to_string(),
            name: subject_name.to_string(),
            exp: expires_at.timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|_| AuthError::InvalidToken)
    }

    /// Verify a credential and return its claims.
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }
}
