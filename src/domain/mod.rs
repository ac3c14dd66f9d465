//! # Domain Layer Module
//!
//! 코스트쿡 백엔드의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서와 매핑되는 영속 객체 (User, SocialAccount, Review)
//! ├── models    - 영속되지 않는 도메인 모델 (토큰 클레임, 인증 사용자, 소셜 신원)
//! └── dto       - HTTP 요청/응답 본문
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```
//!
//! ## 의존 방향
//!
//! - `dto`는 `entities`와 `models`에 의존할 수 있지만 반대 방향은 허용하지 않습니다.
//! - 엔티티는 HTTP 계층을 알지 못합니다. 응답 변환은 `From<Entity>` 구현으로 `dto`에 둡니다.
//! - 소셜 로그인 입력은 [`models::SocialIdentity`]로 한 번 검증한 뒤에만 서비스 내부로 흘러갑니다.

pub mod dto;
pub mod entities;
pub mod models;
