//! Access tokens
//!
//! HS256 JWTs carrying the user id as subject and the username as a claim.

use chrono::{Duration, Utc};
use forum_core::{Identity, RecordId};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Rebuild the identity the token was issued for
    ///
    /// # Errors
    /// Returns `InvalidToken` if the subject is not a valid id
    pub fn identity(&self) -> Result<Identity, AppError> {
        let id = self
            .sub
            .parse::<RecordId>()
            .map_err(|_| AppError::InvalidToken)?;
        Ok(Identity::new(id, self.username.clone()))
    }
}

/// Token returned to a client after login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Issues and validates access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and token lifetime in seconds
    pub fn new(secret: &str, access_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
        }
    }

    /// Issue an access token for an authenticated identity
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, identity: &Identity) -> Result<AccessToken, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: identity.id.to_string(),
            username: identity.username.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_token_expiry)).timestamp(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))?;

        Ok(AccessToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_expiry,
        })
    }

    /// Decode and validate a token
    ///
    /// # Errors
    /// Returns `TokenExpired` or `InvalidToken`
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test-secret-key-for-testing-only", 900)
    }

    #[test]
    fn test_issue_and_validate() {
        let jwt = service();
        let identity = Identity::new(RecordId::new(42), "alice");

        let token = jwt.issue(&identity).unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 900);

        let claims = jwt.validate(&token.access_token).unwrap();
        assert_eq!(claims.sub, "42");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.identity().unwrap(), identity);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = service()
            .issue(&Identity::new(RecordId::new(1), "alice"))
            .unwrap();
        let other = JwtService::new("another-secret", 900);
        assert!(matches!(
            other.validate(&token.access_token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token() {
        // Past the default 60s leeway
        let jwt = JwtService::new("test-secret-key-for-testing-only", -120);
        let token = jwt.issue(&Identity::new(RecordId::new(1), "alice")).unwrap();
        assert!(matches!(
            jwt.validate(&token.access_token),
            Err(AppError::TokenExpired)
        ));
    }

    #[test]
    fn test_garbage_token() {
        assert!(matches!(
            service().validate("not.a.token"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_claims_with_bad_subject() {
        let claims = Claims {
            sub: "abc".to_string(),
            username: "alice".to_string(),
            iat: 0,
            exp: 0,
        };
        assert!(matches!(claims.identity(), Err(AppError::InvalidToken)));
    }
}
