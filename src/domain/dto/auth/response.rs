//! 인증 응답 DTO

use serde::Serialize;

use crate::domain::models::TokenPair;

pub const SIGN_UP_MESSAGE: &str = "회원가입 후 로그인이 완료되었습니다.";
pub const LOGIN_MESSAGE: &str = "로그인에 성공했습니다.";

/// 소셜 로그인 응답 본문
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpOrLoginResponse {
    pub message: String,
    pub access_token: String,
    pub is_new_user: bool,
}

impl SignUpOrLoginResponse {
    pub fn new(access_token: String, is_new_user: bool) -> Self {
        let message = if is_new_user { SIGN_UP_MESSAGE } else { LOGIN_MESSAGE };

        Self {
            message: message.to_string(),
            access_token,
            is_new_user,
        }
    }
}

/// 서비스 계층이 핸들러에 돌려주는 로그인 결과
///
/// 본문에는 액세스 토큰만 담기고, 리프레시 토큰은 `tokens`를 통해 쿠키로만 전달됩니다.
#[derive(Debug, Clone)]
pub struct SignUpOrLoginOutcome {
    pub body: SignUpOrLoginResponse,
    pub tokens: TokenPair,
}

/// 토큰 갱신 응답 본문
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

impl From<&TokenPair> for RefreshTokenResponse {
    fn from(tokens: &TokenPair) -> Self {
        Self {
            access_token: tokens.access_token.clone(),
            expires_in: tokens.expires_in,
        }
    }
}
