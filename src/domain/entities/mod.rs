//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 모든 엔티티는 MongoDB 컬렉션의 문서와 직접 매핑됩니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (MongoDB 문서 매핑)
//! ├── models/       ← 인증/토큰 도메인 모델
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```
//!
//! ## 엔티티 관계
//!
//! ```text
//! User 1 ──── * SocialAccount   (provider, social_key)
//! User 1 ──── * Review          (recipe_id, score, comment)
//! ```
//!
//! - **ObjectId 참조**: 엔티티 간 직접 포함 대신 `user_id`로 참조합니다.
//! - **BSON 직렬화**: `_id` 필드는 저장 전까지 `None`이며 저장 시 할당됩니다.
//! - **불변 생성 시각**: `created_at`은 생성자에서만 설정됩니다.

pub mod users;
pub mod social_accounts;
pub mod reviews;

pub use users::user::User;
pub use social_accounts::social_account::SocialAccount;
pub use reviews::review::Review;
