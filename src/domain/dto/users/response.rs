use serde::Serialize;

use crate::domain::entities::User;

/// 사용자 프로필 응답 DTO
///
/// 리프레시 토큰은 절대 포함하지 않습니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub nickname: Option<String>,
    pub profile_image_url: Option<String>,
    pub preferred_ingredients: Vec<i64>,
    pub disliked_ingredients: Vec<i64>,
    pub personal_info_agreement: bool,
    pub roles: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            nickname,
            profile_image_url,
            preferred_ingredients,
            disliked_ingredients,
            personal_info_agreement,
            roles,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            nickname,
            profile_image_url,
            preferred_ingredients,
            disliked_ingredients,
            personal_info_agreement,
            roles,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_user_response_hides_refresh_token() {
        let mut user = User::new_social("a@x.com".to_string());
        user.id = Some(ObjectId::new());
        user.replace_refresh_token(Some("secret-refresh".to_string()));

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();

        assert!(!json.contains("secret-refresh"));
        assert!(json.contains("\"personalInfoAgreement\":false"));
    }
}
