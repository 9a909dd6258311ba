/**
 * Session Tokens
 *
 * This module signs and verifies the HS256 JSON Web Tokens handed out by
 * signin and presented by clients on post mutations.
 *
 * Tokens carry `{id, name}`. An `exp` claim is added only when a token TTL
 * is configured; tokens without `exp` never expire.
 */

use std::time::Duration;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID; kept as raw JSON so non-string ids can be coerced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Display name at signin time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Expiration time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

impl Claims {
    /// The `id` claim as a string, or `None` when it is absent or empty
    pub fn subject(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Signing and verification keys derived from the shared secret
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Option<Duration>,
}

impl SessionKeys {
    /// Build keys from `JWT_SECRET`
    pub fn new(secret: &str, ttl: Option<Duration>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is checked when present but not demanded.
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Create a token for a user
    ///
    /// # Arguments
    /// * `user_id` - User ID
    /// * `name` - User's display name, if any
    pub fn create_token(
        &self,
        user_id: &str,
        name: Option<&str>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let exp = self
            .ttl
            .map(|ttl| jsonwebtoken::get_current_timestamp() + ttl.as_secs());

        self.sign(&Claims {
            id: Some(Value::String(user_id.to_string())),
            name: name.map(str::to_string),
            exp,
        })
    }

    /// Sign arbitrary claims
    pub fn sign(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
    }

    /// Verify and decode a token
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(token_data.claims)
    }
}
