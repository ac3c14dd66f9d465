//! 검증을 마친 소셜 로그인 신원

use crate::config::SocialProvider;
use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::require_field;

/// 이메일, 소셜 키, 제공자가 모두 유효한 소셜 신원
///
/// 생성자를 통해서만 만들 수 있으므로 이 값을 가진 코드는 입력 검증을 다시 할 필요가 없습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialIdentity {
    email: String,
    social_key: String,
    provider: SocialProvider,
}

impl SocialIdentity {
    /// 원시 입력값을 검증합니다.
    ///
    /// 필드 누락 검사가 제공자 검사보다 먼저 수행됩니다.
    /// 그래서 `email`이 비어 있고 `provider`도 잘못된 요청은 `MissingField`로 거절됩니다.
    /// 제공자는 공백 제거 없이 `kakao` 또는 `google`과 정확히 일치해야 합니다.
    pub fn parse(
        email: Option<&str>,
        social_key: Option<&str>,
        provider: Option<&str>,
    ) -> AppResult<Self> {
        let email = require_field(email, "email")?;
        let social_key = require_field(social_key, "socialKey")?;
        let provider = provider
            .filter(|raw| !raw.trim().is_empty())
            .ok_or_else(|| AppError::MissingField("provider".to_string()))?
            .parse::<SocialProvider>()?;

        Ok(Self { email, social_key, provider })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn social_key(&self) -> &str {
        &self.social_key
    }

    pub fn provider(&self) -> SocialProvider {
        self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_identity() {
        let identity = SocialIdentity::parse(Some(" a@x.com "), Some("sk1"), Some("kakao")).unwrap();

        assert_eq!(identity.email(), "a@x.com");
        assert_eq!(identity.social_key(), "sk1");
        assert_eq!(identity.provider(), SocialProvider::Kakao);
    }

    #[test]
    fn test_parse_reports_missing_field_name() {
        let cases = [
            (None, Some("sk1"), Some("kakao"), "email"),
            (Some("a@x.com"), Some("  "), Some("kakao"), "socialKey"),
            (Some("a@x.com"), Some("sk1"), None, "provider"),
        ];

        for (email, social_key, provider, expected) in cases {
            match SocialIdentity::parse(email, social_key, provider) {
                Err(AppError::MissingField(field)) => assert_eq!(field, expected),
                other => panic!("expected MissingField({expected}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_rejects_unknown_provider() {
        let result = SocialIdentity::parse(Some("a@x.com"), Some("sk1"), Some("naver"));
        assert!(matches!(result, Err(AppError::InvalidProvider(p)) if p == "naver"));

        for provider in ["Kakao", " kakao", "google "] {
            let result = SocialIdentity::parse(Some("a@x.com"), Some("sk1"), Some(provider));
            assert!(matches!(result, Err(AppError::InvalidProvider(p)) if p == provider));
        }
    }

    #[test]
    fn test_missing_field_takes_precedence_over_provider() {
        let result = SocialIdentity::parse(Some(""), Some("sk1"), Some("naver"));
        assert!(matches!(result, Err(AppError::MissingField(_))));
    }
}
