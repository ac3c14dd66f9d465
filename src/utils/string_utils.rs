//! # 문자열 유틸리티
//!
//! 요청 입력값의 공백 정리와 필수 필드 검증에 쓰이는 공통 함수들입니다.

use serde::Deserialize;

use crate::core::errors::{AppError, AppResult};

/// 필수 필드를 검증하고 앞뒤 공백을 제거합니다.
///
/// 값이 없거나 공백뿐이면 `MissingField(field_name)`을 반환합니다.
/// 빈 문자열을 누락으로 취급하므로 `""`인 이메일이나 소셜 키로는 계정이 만들어지지 않습니다.
///
/// ```rust,ignore
/// use crate::utils::string_utils::require_field;
///
/// assert_eq!(require_field(Some("  a@x.com "), "email").unwrap(), "a@x.com");
/// assert!(require_field(Some("   "), "email").is_err());
/// assert!(require_field(None::<&str>, "email").is_err());
/// ```
pub fn require_field<S: AsRef<str>>(value: Option<S>, field_name: &str) -> AppResult<String> {
    let value: Option<&str> = value.as_ref().map(|v| v.as_ref());

    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::MissingField(field_name.to_string()))
}

/// 선택적 문자열 필드 정리
///
/// None이거나 공백뿐이면 None, 그렇지 않으면 trim된 값을 돌려줍니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 쓰며,
/// 빈 문자열과 공백 문자열은 `None`으로 역직렬화됩니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field() {
        assert_eq!(require_field(Some("Hello"), "name").unwrap(), "Hello");
        assert_eq!(require_field(Some("  World  ".to_string()), "name").unwrap(), "World");

        for blank in ["", "   ", "\t\n"] {
            assert!(matches!(
                require_field(Some(blank), "email"),
                Err(AppError::MissingField(field)) if field == "email"
            ));
        }
        assert!(matches!(
            require_field(None::<String>, "provider"),
            Err(AppError::MissingField(field)) if field == "provider"
        ));
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  안녕하세요  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("안녕하세요".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "   "}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        // 필드가 없으면 default
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.optional_field, None);
    }
}
