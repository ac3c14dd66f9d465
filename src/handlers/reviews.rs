//! 리뷰 핸들러
use actix_web::{delete, patch, post, web, HttpResponse};
use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::core::errors::AppError;
use crate::domain::dto::reviews::{CreateReviewRequest, UpdateReviewRequest};
use crate::domain::models::AuthenticatedUser;
use crate::services::reviews::ReviewService;

fn parse_review_id(raw: &str) -> Result<ObjectId, AppError> {
    // 형식이 맞지 않는 ID는 존재하지 않는 리뷰로 취급
    ObjectId::parse_str(raw).map_err(|_| AppError::NotFound("리뷰를 찾을 수 없습니다".to_string()))
}

#[post("")]
pub async fn create_review(
    user: AuthenticatedUser,
    review_service: web::Data<ReviewService>,
    payload: web::Json<CreateReviewRequest>,
) -> Result<HttpResponse, AppError> {
    let created = review_service
        .create_review(payload.into_inner(), &user.object_id()?)
        .await?;

    Ok(HttpResponse::Created().json(created))
}

#[patch("/{review_id}")]
pub async fn modify_review(
    user: AuthenticatedUser,
    review_service: web::Data<ReviewService>,
    path: web::Path<String>,
    payload: web::Json<UpdateReviewRequest>,
) -> Result<HttpResponse, AppError> {
    let review_id = parse_review_id(&path)?;
    let review = review_service
        .modify_review(payload.into_inner(), &user.object_id()?, &review_id)
        .await?;

    Ok(HttpResponse::Ok().json(review))
}

#[delete("/{review_id}")]
pub async fn delete_review(
    user: AuthenticatedUser,
    review_service: web::Data<ReviewService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let review_id = parse_review_id(&path)?;

    if !review_service.delete_review(&user.object_id()?, &review_id).await? {
        return Err(AppError::AuthorizationError("본인이 작성한 리뷰만 삭제할 수 있습니다".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "리뷰가 삭제되었습니다." })))
}
