//! 코스트쿡 백엔드
//!
//! 레시피 비용 관리 서비스의 API 서버입니다.
//! 카카오/구글 소셜 로그인 하나로 회원가입과 로그인을 처리하고,
//! JWT 액세스/리프레시 토큰을 발급하며, 프로필과 레시피 리뷰를 관리합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답, 토큰 쿠키
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← trait 포트 + MongoDB / 인메모리 구현
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← users, social_accounts, reviews
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use costcook_backend::core::registry::ServiceRegistry;
//!
//! let registry = ServiceRegistry::with_mongo(database).await?;
//! let outcome = registry.auth_service.sign_up_or_login(request).await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
