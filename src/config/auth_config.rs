//! # Authentication Configuration Module
//!
//! JWT 토큰, 토큰 쿠키, 소셜 로그인 제공자 관련 설정을 관리하는 모듈입니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ACCESS_EXPIRATION_MINUTES="60"
//! export JWT_REFRESH_EXPIRATION_DAYS="14"
//! export COOKIE_DOMAIN="costcook.example.com"   # 선택
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{JwtConfig, SocialProvider};
//!
//! let secret = JwtConfig::secret();
//! let provider: SocialProvider = "kakao".parse()?;
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Environment;
use crate::core::errors::AppError;

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "costcook-secret-key".to_string()
            })
    }

    /// 액세스 토큰 유효 시간 (분)
    pub fn access_expiration_minutes() -> i64 {
        env::var("JWT_ACCESS_EXPIRATION_MINUTES")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .unwrap_or(60)
    }

    /// 리프레시 토큰 유효 기간 (일)
    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "14".to_string())
            .parse()
            .unwrap_or(14)
    }
}

/// 토큰 쿠키 설정
///
/// 개발 환경에서는 http 로컬 서버에서도 쿠키가 전달되도록 `Secure` 속성을 끕니다.
pub struct CookieConfig;

impl CookieConfig {
    pub fn secure() -> bool {
        Self::secure_for_env(&Environment::current())
    }

    pub fn secure_for_env(env: &Environment) -> bool {
        !matches!(env, Environment::Development | Environment::Test)
    }

    pub fn domain() -> Option<String> {
        env::var("COOKIE_DOMAIN").ok().filter(|d| !d.trim().is_empty())
    }
}

/// 지원하는 소셜 로그인 제공자
///
/// 요청 경계에서 한 번만 문자열을 파싱하고, 이후 계층에서는 이 열거형만 사용합니다.
/// 새로운 제공자를 추가할 때는 변형과 `as_str`/`from_str` 매핑만 늘리면 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Kakao,
    Google,
}

impl SocialProvider {
    pub const ALL: [SocialProvider; 2] = [SocialProvider::Kakao, SocialProvider::Google];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::Kakao => "kakao",
            SocialProvider::Google => "google",
        }
    }
}

impl FromStr for SocialProvider {
    type Err = AppError;

    /// 대소문자를 구분하여 정확히 일치하는 값만 허용합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kakao" => Ok(SocialProvider::Kakao),
            "google" => Ok(SocialProvider::Google),
            other => Err(AppError::InvalidProvider(other.to_string())),
        }
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
