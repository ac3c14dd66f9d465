//! # 리뷰 서비스
//!
//! 리뷰는 작성자만 수정하거나 삭제할 수 있습니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::reviews::{CreateReviewRequest, CreateReviewResponse, ReviewResponse, UpdateReviewRequest};
use crate::domain::entities::Review;
use crate::repositories::reviews::ReviewRepository;

pub struct ReviewService {
    review_repo: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    pub fn new(review_repo: Arc<dyn ReviewRepository>) -> Self {
        Self { review_repo }
    }

    async fn load(&self, review_id: &ObjectId) -> AppResult<Review> {
        self.review_repo
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| AppError::NotFound("리뷰를 찾을 수 없습니다".to_string()))
    }

    pub async fn create_review(&self, request: CreateReviewRequest, user_id: &ObjectId) -> AppResult<CreateReviewResponse> {
        request.validate()?;

        let review = Review::new(request.recipe_id, *user_id, request.score, request.comment);
        let saved = self.review_repo.save(review).await?;

        let review_id = saved.id_string().ok_or_else(|| {
            AppError::InternalError("저장된 리뷰에 ID가 없습니다".to_string())
        })?;
        log::info!("리뷰 작성: recipe={}, review={}", saved.recipe_id, review_id);

        Ok(CreateReviewResponse { review_id })
    }

    pub async fn modify_review(
        &self,
        request: UpdateReviewRequest,
        user_id: &ObjectId,
        review_id: &ObjectId,
    ) -> AppResult<ReviewResponse> {
        request.validate()?;

        let mut review = self.load(review_id).await?;
        if !review.is_written_by(user_id) {
            return Err(AppError::AuthorizationError("본인이 작성한 리뷰만 수정할 수 있습니다".to_string()));
        }

        if let Some(score) = request.score {
            review.score = score;
        }
        if let Some(comment) = request.comment {
            review.comment = comment;
        }
        review.touch();

        let saved = self.review_repo.save(review).await?;
        Ok(ReviewResponse::from(saved))
    }

    /// 리뷰를 삭제합니다.
    ///
    /// 리뷰가 없으면 `NotFound`, 작성자가 아니면 `Ok(false)`를 반환합니다.
    pub async fn delete_review(&self, user_id: &ObjectId, review_id: &ObjectId) -> AppResult<bool> {
        let review = self.load(review_id).await?;
        if !review.is_written_by(user_id) {
            log::warn!("다른 사용자의 리뷰 삭제 시도: review={}, user={}", review_id, user_id);
            return Ok(false);
        }

        self.review_repo.delete_by_id(review_id).await
    }
}
