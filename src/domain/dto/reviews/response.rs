use serde::Serialize;

use crate::domain::entities::Review;

/// 리뷰 작성 결과
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewResponse {
    pub review_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: String,
    pub recipe_id: i64,
    pub user_id: String,
    pub score: i32,
    pub comment: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id_string().unwrap_or_default(),
            recipe_id: review.recipe_id,
            user_id: review.user_id.to_hex(),
            score: review.score,
            comment: review.comment,
            created_at: review.created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: review.updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}
