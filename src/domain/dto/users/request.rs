//! 사용자 프로필 수정 요청 DTO

use std::collections::HashSet;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::string_utils::deserialize_optional_string;

/// 프로필 수정 요청
///
/// 모든 필드는 선택값이며, 보내지 않은 필드는 변경되지 않습니다.
/// 닉네임은 trim 후 비어 있으면 보내지 않은 것으로 간주합니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_ingredient_preferences"))]
pub struct UserUpdateRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 1, max = 20, message = "닉네임은 1-20자 사이여야 합니다"))]
    pub nickname: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(url(message = "유효한 이미지 URL이 아닙니다"))]
    pub profile_image_url: Option<String>,

    #[serde(default)]
    pub preferred_ingredients: Option<Vec<i64>>,

    #[serde(default)]
    pub disliked_ingredients: Option<Vec<i64>>,

    #[serde(default)]
    pub personal_info_agreement: Option<bool>,
}

/// 같은 재료가 선호와 비선호 목록에 동시에 들어갈 수 없습니다.
///
/// 한쪽 목록만 보낸 경우 저장된 다른 쪽 목록과의 비교는 서비스 계층에서 수행합니다.
fn validate_ingredient_preferences(req: &UserUpdateRequest) -> Result<(), ValidationError> {
    if let (Some(preferred), Some(disliked)) = (&req.preferred_ingredients, &req.disliked_ingredients) {
        if has_overlap(preferred, disliked) {
            return Err(ValidationError::new("ingredient_overlap")
                .with_message("같은 재료를 선호와 비선호에 동시에 지정할 수 없습니다".into()));
        }
    }
    Ok(())
}

pub fn has_overlap(preferred: &[i64], disliked: &[i64]) -> bool {
    let preferred: HashSet<&i64> = preferred.iter().collect();
    disliked.iter().any(|id| preferred.contains(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_nickname_is_ignored() {
        let req: UserUpdateRequest = serde_json::from_str(r#"{"nickname":"   "}"#).unwrap();

        assert!(req.nickname.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_nickname_length_is_counted_in_chars() {
        let req = UserUpdateRequest {
            nickname: Some("가".repeat(20)),
            ..Default::default()
        };
        assert!(req.validate().is_ok());

        let req = UserUpdateRequest {
            nickname: Some("가".repeat(21)),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_overlapping_ingredients_are_rejected() {
        let req: UserUpdateRequest = serde_json::from_str(
            r#"{"preferredIngredients":[1,2,3],"dislikedIngredients":[3,4]}"#,
        ).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_invalid_image_url_is_rejected() {
        let req: UserUpdateRequest = serde_json::from_str(r#"{"profileImageUrl":"not a url"}"#).unwrap();
        assert!(req.validate().is_err());

        let req: UserUpdateRequest =
            serde_json::from_str(r#"{"profileImageUrl":"https://cdn.costcook.kr/p/1.png"}"#).unwrap();
        assert!(req.validate().is_ok());
    }
}
