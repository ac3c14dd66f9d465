//! Social Account Entity Implementation
//!
//! 소셜 로그인 제공자가 발급한 식별자(social key)와 사용자를 연결합니다.
//! 한 사용자는 여러 제공자 계정을 가질 수 있지만,
//! `(social_key, provider)` 쌍은 유니크 인덱스로 하나만 존재합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::config::SocialProvider;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialAccount {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소셜 로그인 제공자
    pub provider: SocialProvider,
    /// 제공자 범위 내에서 사용자를 식별하는 키
    pub social_key: String,
    /// 소유 사용자 ID
    pub user_id: ObjectId,
    pub created_at: DateTime,
}

impl SocialAccount {
    pub fn new(provider: SocialProvider, social_key: String, user_id: ObjectId) -> Self {
        Self {
            id: None,
            provider,
            social_key,
            user_id,
            created_at: DateTime::now(),
        }
    }

    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        &self.user_id == user_id
    }
}
