//! Review Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 레시피 리뷰
///
/// 작성자(`user_id`)만 수정/삭제할 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub recipe_id: i64,
    pub user_id: ObjectId,
    /// 별점 (1-5)
    pub score: i32,
    pub comment: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Review {
    pub fn new(recipe_id: i64, user_id: ObjectId, score: i32, comment: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            recipe_id,
            user_id,
            score,
            comment,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_written_by(&self, user_id: &ObjectId) -> bool {
        &self.user_id == user_id
    }

    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}
