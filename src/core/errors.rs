//! # Application Error Handling System
//!
//! 코스트쿡 백엔드 전역에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고 `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?` 한 번으로 일관된 JSON 에러 응답을 만들어 냅니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `MissingField` | 400 Bad Request | 소셜 로그인 필수 필드 누락 |
//! | `InvalidProvider` | 400 Bad Request | 지원하지 않는 소셜 로그인 제공자 |
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 누락/만료/위조 |
//! | `AuthorizationError` | 403 Forbidden | 다른 사용자의 리소스 접근 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 유니크 제약 위반 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "code": "MISSING_FIELD",
//!   "error": "필수 입력값이 누락되었습니다: email"
//! }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let user = user_repo.find_by_email(email).await?
//!     .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 소셜 로그인 요청의 클라이언트 입력 오류(`MissingField`, `InvalidProvider`)는
/// 검증 단계에서 즉시 반환되며, 영속성 계층 오류는 재시도 없이 그대로 전파됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 입력 필드 누락 (400 Bad Request)
    ///
    /// 값에는 누락된 필드 이름이 담깁니다.
    #[error("필수 입력값이 누락되었습니다: {0}")]
    MissingField(String),

    /// 지원하지 않는 소셜 로그인 제공자 (400 Bad Request)
    #[error("적절하지 않은 소셜 로그인 제공자입니다: {0}")]
    InvalidProvider(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 이메일 또는 (social_key, provider) 유니크 인덱스 위반 시 발생합니다.
    /// 동일한 신규 사용자가 동시에 가입을 시도하는 경합에서 뒤늦은 요청이 받게 됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트가 분기 처리에 사용할 수 있는 고정 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingField(_) => "MISSING_FIELD",
            AppError::InvalidProvider(_) => "INVALID_PROVIDER",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ConflictError(_) => "CONFLICT",
            AppError::AuthenticationError(_) => "AUTHENTICATION_ERROR",
            AppError::AuthorizationError(_) => "AUTHORIZATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_)
            | AppError::InvalidProvider(_)
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 상세 내용을 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 중 서버 오류: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "code": self.code(),
                "error": self.to_string()
            }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let count = collection.count_documents(doc! {}).await
///     .context("리뷰 개수 조회 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
