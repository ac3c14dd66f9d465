//! 인증 요청 DTO

use serde::Deserialize;

/// 소셜 로그인(회원가입 겸용) 요청
///
/// 세 필드 모두 와이어 수준에서는 선택값입니다.
/// 누락 여부를 서비스 계층에서 `MissingField`로 구분해 보고하기 위함입니다.
///
/// ```json
/// { "email": "a@x.com", "socialKey": "sk1", "provider": "kakao" }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpOrLoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub social_key: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
}

/// 토큰 갱신 요청 본문
///
/// 쿠키가 없을 때만 사용됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_or_login_request_accepts_partial_body() {
        let req: SignUpOrLoginRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();

        assert_eq!(req.email.as_deref(), Some("a@x.com"));
        assert!(req.social_key.is_none());
        assert!(req.provider.is_none());
    }

    #[test]
    fn test_sign_up_or_login_request_uses_camel_case() {
        let req: SignUpOrLoginRequest =
            serde_json::from_str(r#"{"email":"a@x.com","socialKey":"sk1","provider":"google"}"#).unwrap();

        assert_eq!(req.social_key.as_deref(), Some("sk1"));
        assert_eq!(req.provider.as_deref(), Some("google"));
    }
}
