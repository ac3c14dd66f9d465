//! JWT 토큰 관리 서비스 구현
//!
//! HS256으로 서명한 액세스 토큰과 리프레시 토큰을 발급하고 검증합니다.
//! 두 토큰은 같은 클레임 구조를 쓰며 `token_type`으로만 구분되므로,
//! 검증 시 용도가 다른 토큰은 거절합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::User;
use crate::domain::models::{TokenClaims, TokenPair, TokenType};

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, access_expiration_minutes: i64, refresh_expiration_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl: Duration::minutes(access_expiration_minutes),
            refresh_ttl: Duration::days(refresh_expiration_days),
        }
    }

    /// `JWT_SECRET`, `JWT_ACCESS_EXPIRATION_MINUTES`, `JWT_REFRESH_EXPIRATION_DAYS`로 생성
    pub fn from_env() -> Self {
        Self::new(
            &JwtConfig::secret(),
            JwtConfig::access_expiration_minutes(),
            JwtConfig::refresh_expiration_days(),
        )
    }

    /// 액세스 토큰 유효 시간 (초)
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl.num_seconds()
    }

    /// 리프레시 토큰 유효 시간 (초)
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl.num_seconds()
    }

    fn generate_token(&self, user: &User, token_type: TokenType) -> AppResult<String> {
        let sub = user.id_string().ok_or_else(|| {
            AppError::InternalError("저장되지 않은 사용자에게 토큰을 발급할 수 없습니다".to_string())
        })?;

        let now = Utc::now();
        let ttl = match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        };

        let claims = TokenClaims {
            sub,
            email: user.email.clone(),
            roles: user.roles.clone(),
            token_type,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        self.generate_token(user, TokenType::Access)
    }

    pub fn generate_refresh_token(&self, user: &User) -> AppResult<String> {
        self.generate_token(user, TokenType::Refresh)
    }

    pub fn generate_token_pair(&self, user: &User) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.generate_access_token(user)?,
            refresh_token: self.generate_refresh_token(user)?,
            expires_in: self.access_ttl_seconds(),
            refresh_expires_in: self.refresh_ttl_seconds(),
        })
    }

    fn verify_token(&self, token: &str, expected: TokenType) -> AppResult<TokenClaims> {
        let validation = Validation::new(Algorithm::HS256);

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })?;

        if claims.token_type != expected {
            return Err(AppError::AuthenticationError("토큰 용도가 올바르지 않습니다".to_string()));
        }

        Ok(claims)
    }

    pub fn verify_access_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.verify_token(token, TokenType::Access)
    }

    pub fn verify_refresh_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.verify_token(token, TokenType::Refresh)
    }

    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}
