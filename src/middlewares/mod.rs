//! HTTP 미들웨어
//!
//! - [`AuthMiddleware`]: JWT 액세스 토큰 검증 후 [`AuthenticatedUser`](crate::domain::models::AuthenticatedUser)를
//!   요청 확장에 저장합니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
