use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Access token time-to-live in seconds
pub const ACCESS_TOKEN_TTL: i64 = 900; // 15 minutes

/// Role carried in the token claims.
///
/// `Admin` may manage the catalog; `SuperAdmin` additionally manages
/// coupons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    Admin,
    SuperAdmin,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,     // Subject (user ID)
    pub email: String,   // User email
    pub role: AdminRole, // Role used by the route guards
    pub exp: i64,        // Expiration time
    pub iat: i64,        // Issued at
}

/// Stateless HS256 JWT authentication
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
        }
    }

    /// Create an access token for the given user
    pub fn create_access_token(
        &self,
        user_id: &str,
        email: &str,
        role: AdminRole,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role,
            exp: (now + Duration::seconds(ACCESS_TOKEN_TTL)).timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::new(jsonwebtoken::Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Verify a token's signature and expiry, returning its claims
    pub fn verify_token(&self, token: &str) -> Result<JwtClaims, jsonwebtoken::errors::Error> {
        let data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(jsonwebtoken::Algorithm::HS256),
        )?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("test-secret"))
    }

    #[test]
    fn test_token_round_trip() {
        let auth = auth();
        let token = auth
            .create_access_token("user-1", "admin@example.com", AdminRole::Admin)
            .unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.role, AdminRole::Admin);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = auth()
            .create_access_token("user-1", "admin@example.com", AdminRole::SuperAdmin)
            .unwrap();

        let other = JwtAuth::new(&JwtConfig::new("different-secret"));
        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(auth().verify_token("not-a-jwt").is_err());
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&AdminRole::SuperAdmin).unwrap();
        assert_eq!(json, "\"super_admin\"");
    }
}
