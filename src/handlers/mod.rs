//! HTTP 핸들러
//!
//! 핸들러는 요청 추출과 응답 구성만 담당하고, 비즈니스 로직은 서비스 계층에 위임합니다.
//! 서비스는 [`ServiceRegistry`](crate::core::registry::ServiceRegistry)가 `web::Data`로 등록합니다.

pub mod auth;
pub mod reviews;
pub mod users;
