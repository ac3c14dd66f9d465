//! 사용자 프로필 핸들러
use actix_web::{get, patch, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::UserUpdateRequest;
use crate::domain::models::AuthenticatedUser;
use crate::services::users::UserService;

/// 내 정보 조회
#[get("/me")]
pub async fn get_current_user(
    user: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let profile = user_service.get_user(&user.object_id()?).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// 프로필 수정
#[patch("/me")]
pub async fn update_current_user(
    user: AuthenticatedUser,
    user_service: web::Data<UserService>,
    payload: web::Json<UserUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let profile = user_service
        .update_user(&user.object_id()?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}
