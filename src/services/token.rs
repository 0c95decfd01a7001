//! Token codec - signed claim encoding and verification.
//!
//! One codec instance is built from the immutable `Config` at startup and
//! shared by the auth service (issuance) and the authentication middleware
//! (verification). The codec itself is agnostic to the access/refresh
//! distinction; the marker claim is a caller convention.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::Config;
use crate::errors::AppResult;

/// Marker claim distinguishing token kinds on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    #[serde(rename = "refresh-token")]
    Refresh,
}

/// JWT claims payload.
///
/// `exp` is always injected by the codec at encode time; whatever value the
/// caller put there is overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    #[serde(default)]
    pub exp: i64,
    #[serde(
        rename = "token-type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<TokenKind>,
}

impl Claims {
    /// Claims for an access token.
    pub fn access(user_id: i32) -> Self {
        Self {
            user_id,
            exp: 0,
            kind: None,
        }
    }

    /// Claims for a refresh token (carries the marker claim).
    pub fn refresh(user_id: i32) -> Self {
        Self {
            user_id,
            exp: 0,
            kind: Some(TokenKind::Refresh),
        }
    }

    pub fn is_refresh(&self) -> bool {
        self.kind == Some(TokenKind::Refresh)
    }
}

/// Token response returned after successful authentication.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenPair {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// JWT refresh token (carries the `token-type: refresh-token` claim)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

/// Encodes and decodes signed claim sets with a shared secret.
///
/// HMAC-class algorithms only; the algorithm and TTL come from `Config`
/// and are fixed for every token issued by this process.
pub struct TokenCodec {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl TokenCodec {
    pub fn new(secret: &[u8], algorithm: Algorithm, ttl_seconds: i64) -> Self {
        Self {
            header: Header::new(algorithm),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::new(algorithm),
            ttl_seconds,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.jwt_secret_bytes(),
            config.jwt_algorithm,
            config.jwt_ttl_seconds,
        )
    }

    /// Sign a claim set, injecting `exp = now + ttl`, and return the
    /// compact URL-safe token string.
    pub fn encode(&self, mut claims: Claims) -> AppResult<String> {
        claims.exp = Utc::now().timestamp() + self.ttl_seconds;
        encode(&self.header, &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify signature and expiry, then return the claims.
    ///
    /// Nothing is read from the payload before verification completes;
    /// malformed, forged and expired tokens all fail here.
    pub fn decode(&self, token: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}
