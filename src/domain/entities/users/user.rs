//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 소셜 로그인으로만 가입하므로 비밀번호 필드가 없으며,
//! 레시피 추천에 쓰이는 선호/비선호 재료 정보를 함께 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서와 1:1로 매핑됩니다.
/// `email`은 유니크 인덱스로 보호되며, `created_at`은 최초 저장 이후 변경되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 닉네임 (가입 직후에는 비어 있음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// 프로필 이미지 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    /// 선호 재료 ID 목록
    #[serde(default)]
    pub preferred_ingredients: Vec<i64>,
    /// 비선호 재료 ID 목록
    #[serde(default)]
    pub disliked_ingredients: Vec<i64>,
    /// 개인정보 수집 동의 여부
    #[serde(default)]
    pub personal_info_agreement: bool,
    /// 사용자 역할
    pub roles: Vec<String>,
    /// 현재 유효한 리프레시 토큰 (사용자당 최대 1개)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 소셜 로그인으로 처음 가입하는 사용자를 생성합니다.
    ///
    /// 이메일 외의 프로필 정보는 기본값으로 남겨 두고, 이후 프로필 수정에서 채웁니다.
    pub fn new_social(email: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            nickname: None,
            profile_image_url: None,
            preferred_ingredients: Vec::new(),
            disliked_ingredients: Vec::new(),
            personal_info_agreement: false,
            roles: vec!["user".to_string()],
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 리프레시 토큰을 교체합니다. 이전 토큰은 더 이상 유효하지 않습니다.
    pub fn replace_refresh_token(&mut self, refresh_token: Option<String>) {
        self.refresh_token = refresh_token;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}
