//! Authentication HTTP Handlers
//!
//! 소셜 로그인(회원가입 겸용), 토큰 재발급, 로그아웃 엔드포인트입니다.
//! 리프레시 토큰은 응답 본문에 싣지 않고 HttpOnly 쿠키로만 전달합니다.
use actix_web::{post, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::domain::dto::auth::{RefreshTokenRequest, RefreshTokenResponse, SignUpOrLoginRequest};
use crate::domain::models::AuthenticatedUser;
use crate::services::auth::AuthService;
use crate::utils::cookie_utils::{clear_token_cookies, set_token_cookies, REFRESH_TOKEN_COOKIE};
use crate::utils::string_utils::clean_optional_string;

/// 소셜 로그인
///
/// ```json
/// POST /api/auth/login
/// { "email": "a@x.com", "socialKey": "sk1", "provider": "kakao" }
/// ```
#[post("/login")]
pub async fn sign_up_or_login(
    auth_service: web::Data<AuthService>,
    payload: web::Json<SignUpOrLoginRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = auth_service.sign_up_or_login(payload.into_inner()).await?;

    let mut response = HttpResponse::Ok();
    set_token_cookies(&mut response, &outcome.tokens);

    Ok(response.json(outcome.body))
}

/// 토큰 재발급
///
/// `refreshToken` 쿠키를 우선 사용하고, 없으면 본문의 `refreshToken`을 사용합니다.
#[post("/refresh")]
pub async fn refresh_token(
    req: HttpRequest,
    auth_service: web::Data<AuthService>,
    payload: Option<web::Json<RefreshTokenRequest>>,
) -> Result<HttpResponse, AppError> {
    let from_cookie = req.cookie(REFRESH_TOKEN_COOKIE).map(|c| c.value().to_string());
    let from_body = payload.and_then(|p| p.into_inner().refresh_token);

    let refresh_token = clean_optional_string(from_cookie)
        .or_else(|| clean_optional_string(from_body))
        .ok_or_else(|| AppError::AuthenticationError("리프레시 토큰이 없습니다".to_string()))?;

    let tokens = auth_service.refresh_tokens(&refresh_token).await?;

    let mut response = HttpResponse::Ok();
    set_token_cookies(&mut response, &tokens);

    Ok(response.json(RefreshTokenResponse::from(&tokens)))
}

#[post("/logout")]
pub async fn logout(
    user: AuthenticatedUser,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    auth_service.logout(&user.object_id()?).await?;

    let mut response = HttpResponse::Ok();
    clear_token_cookies(&mut response);

    Ok(response.json(json!({ "message": "로그아웃되었습니다." })))
}
