//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문 타입입니다. JSON 필드명은 모두 camelCase를 사용합니다.
//!
//! ```text
//! dto/
//! ├── auth/      로그인, 토큰 갱신
//! ├── users/     프로필 조회/수정
//! └── reviews/   리뷰 작성/수정
//! ```
//!
//! 요청 DTO는 `validator::Validate`로 형식을 검증하고,
//! 소셜 로그인 요청처럼 누락 필드를 구분해야 하는 경우에는 서비스 계층에서 직접 검증합니다.

pub mod auth;
pub mod reviews;
pub mod users;
