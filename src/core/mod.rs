//! # Core Module
//!
//! - [`errors`]: 애플리케이션 전역 에러 타입 `AppError`와 HTTP 응답 매핑
//! - [`registry`]: 리포지토리와 서비스를 조립해 actix-web 앱 데이터로 등록하는 `ServiceRegistry`

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
