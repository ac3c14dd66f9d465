//! 리뷰 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 리뷰 작성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub recipe_id: i64,

    /// 별점 (1-5)
    #[validate(range(min = 1, max = 5, message = "별점은 1-5 사이여야 합니다"))]
    pub score: i32,

    #[validate(length(min = 1, max = 500, message = "리뷰 내용은 1-500자 사이여야 합니다"))]
    pub comment: String,
}

/// 리뷰 수정 요청. 보내지 않은 필드는 유지됩니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    #[serde(default)]
    #[validate(range(min = 1, max = 5, message = "별점은 1-5 사이여야 합니다"))]
    pub score: Option<i32>,

    #[serde(default)]
    #[validate(length(min = 1, max = 500, message = "리뷰 내용은 1-500자 사이여야 합니다"))]
    pub comment: Option<String>,
}
