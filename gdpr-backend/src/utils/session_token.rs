// gdpr-backend/src/utils/session_token.rs

//! ハブが発行するセッショントークン (HS256 JWT)

use crate::config::app::SessionConfig;
use crate::middleware::session::HubSession;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SessionTokenError {
    #[error("Failed to encode session token: {0}")]
    EncodingError(#[from] jsonwebtoken::errors::Error),

    #[error("Failed to decode session token: {0}")]
    DecodingError(String),

    #[error("Session token has expired")]
    TokenExpired,

    #[error("Invalid session token")]
    InvalidToken,

    #[error("Invalid session configuration: {0}")]
    ConfigurationError(String),
}

/// セッショントークンのClaims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,
    pub hub_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

impl TryFrom<SessionClaims> for HubSession {
    type Error = SessionTokenError;

    fn try_from(claims: SessionClaims) -> Result<Self, Self::Error> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| SessionTokenError::InvalidToken)?;

        Ok(HubSession {
            user_id,
            hub_id: claims.hub_id,
            name: claims.name,
            email: claims.email,
            role: claims.role,
            permissions: claims.permissions,
        })
    }
}

pub struct SessionManager {
    issuer: String,
    expiry_minutes: i64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionManager {
    pub fn new(config: &SessionConfig) -> Result<Self, SessionTokenError> {
        if config.secret_key.len() < 32 {
            return Err(SessionTokenError::ConfigurationError(
                "Session secret must be at least 32 characters".to_string(),
            ));
        }

        if config.expiry_minutes <= 0 {
            return Err(SessionTokenError::ConfigurationError(
                "Session expiry must be positive".to_string(),
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;

        Ok(Self {
            issuer: config.issuer.clone(),
            expiry_minutes: config.expiry_minutes,
            encoding_key: EncodingKey::from_secret(config.secret_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            validation,
        })
    }

    /// セッショントークンを発行
    pub fn issue(&self, session: &HubSession) -> Result<String, SessionTokenError> {
        let now = Utc::now();
        let exp = now + Duration::minutes(self.expiry_minutes);

        let claims = SessionClaims {
            sub: session.user_id.to_string(),
            hub_id: session.hub_id,
            name: session.name.clone(),
            email: session.email.clone(),
            role: session.role.clone(),
            permissions: session.permissions.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: self.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(SessionTokenError::EncodingError)
    }

    /// トークンを検証してセッションを復元
    pub fn verify(&self, token: &str) -> Result<HubSession, SessionTokenError> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    SessionTokenError::TokenExpired
                }
                _ => SessionTokenError::DecodingError(e.to_string()),
            })?;

        token_data.claims.try_into()
    }
}
