//! JWT access-token validation.
//!
//! Tokens are HS256-signed by the external auth service and carry a
//! [`Claims`] payload. Only signature, expiry and (optionally) issuer are
//! checked here; role checks live in [`crate::middleware::rbac`].

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user id assigned by the auth service.
    pub sub: String,
    /// Role name (e.g. `"admin"`).
    #[serde(default)]
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for JWT validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the auth service.
    pub secret: String,
    /// Expected `iss` claim, if the auth service sets one.
    pub issuer: Option<String>,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var      | Required | Default |
    /// |--------------|----------|---------|
    /// | `JWT_SECRET` | **yes**  | --      |
    /// | `JWT_ISSUER` | no       | unset   |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let issuer = std::env::var("JWT_ISSUER")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self { secret, issuer }
    }
}

/// Validate and decode an access token, returning the embedded [`Claims`].
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    if let Some(issuer) = &config.issuer {
        validation.set_issuer(&[issuer]);
    }

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            issuer: None,
        }
    }

    fn sign(payload: serde_json::Value, secret: &str) -> String {
        encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("encoding should succeed")
    }

    #[test]
    fn valid_token_yields_claims() {
        let config = test_config();
        let now = chrono::Utc::now().timestamp();
        let token = sign(
            json!({ "sub": "user-7", "role": "admin", "iat": now, "exp": now + 900 }),
            &config.secret,
        );

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, "user-7");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn expired_token_fails() {
        let config = test_config();
        let now = chrono::Utc::now().timestamp();
        // Well past the default 60-second leeway.
        let token = sign(
            json!({ "sub": "user-7", "role": "admin", "iat": now - 600, "exp": now - 300 }),
            &config.secret,
        );
        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn wrong_secret_fails() {
        let config = test_config();
        let now = chrono::Utc::now().timestamp();
        let token = sign(
            json!({ "sub": "user-7", "role": "admin", "iat": now, "exp": now + 900 }),
            "some-other-secret",
        );
        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn issuer_is_enforced_when_configured() {
        let config = JwtConfig {
            issuer: Some("lokanta-auth".into()),
            ..test_config()
        };
        let now = chrono::Utc::now().timestamp();
        let foreign = sign(
            json!({ "sub": "u", "role": "admin", "iat": now, "exp": now + 900, "iss": "elsewhere" }),
            &config.secret,
        );
        let ours = sign(
            json!({ "sub": "u", "role": "admin", "iat": now, "exp": now + 900, "iss": "lokanta-auth" }),
            &config.secret,
        );
        assert!(validate_token(&foreign, &config).is_err());
        assert!(validate_token(&ours, &config).is_ok());
    }
}
