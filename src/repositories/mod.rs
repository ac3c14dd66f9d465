//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 `async_trait` 기반의 trait(포트)과 MongoDB 구현체로 구성됩니다.
//! 서비스 계층은 `Arc<dyn UserRepository>`처럼 trait 객체에만 의존하므로,
//! 테스트에서는 [`memory`] 모듈의 인메모리 구현체로 교체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(db.clone()));
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod memory;
pub mod reviews;
pub mod social_accounts;
pub mod users;

use mongodb::error::{ErrorKind, WriteFailure};

use crate::core::errors::AppError;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 쓰기 에러를 `AppError`로 변환합니다.
///
/// 유니크 인덱스 위반은 `ConflictError`, 나머지는 `DatabaseError`가 됩니다.
pub(crate) fn map_write_error(error: mongodb::error::Error, conflict_message: &str) -> AppError {
    if is_duplicate_key(&error) {
        log::warn!("유니크 제약 위반: {}", conflict_message);
        return AppError::ConflictError(conflict_message.to_string());
    }
    AppError::DatabaseError(error.to_string())
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

pub(crate) fn map_read_error(error: mongodb::error::Error) -> AppError {
    AppError::DatabaseError(error.to_string())
}
