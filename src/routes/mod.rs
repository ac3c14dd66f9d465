//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별 scope로 묶고, scope 단위로 인증 미들웨어를 적용합니다.
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | GET | `/health` | - |
//! | POST | `/api/auth/login` | - |
//! | POST | `/api/auth/refresh` | - |
//! | POST | `/api/auth/logout` | 필요 |
//! | GET, PATCH | `/api/users/me` | 필요 |
//! | POST | `/api/reviews` | 필요 |
//! | PATCH, DELETE | `/api/reviews/{review_id}` | 필요 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(|cfg| registry.configure(cfg));
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_review_routes(cfg);
}

/// 인증 라우트
///
/// 로그인과 재발급은 토큰 없이 호출되므로 선택적 인증을 적용하고,
/// 로그아웃은 `AuthenticatedUser` 추출자로 인증을 강제합니다.
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .wrap(AuthMiddleware::optional())
            .service(handlers::auth::sign_up_or_login)
            .service(handlers::auth::refresh_token)
            .service(handlers::auth::logout)
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .wrap(AuthMiddleware::required_with_roles(vec!["user", "admin"]))
            .service(handlers::users::get_current_user)
            .service(handlers::users::update_current_user)
    );
}

fn configure_review_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/reviews")
            .wrap(AuthMiddleware::required_with_roles(vec!["user", "admin"]))
            .service(handlers::reviews::create_review)
            .service(handlers::reviews::modify_review)
            .service(handlers::reviews::delete_review)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "costcook_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
