//! # Domain Models Module
//!
//! 데이터베이스에 직접 저장되지 않는 도메인 모델과 값 객체입니다.
//!
//! - [`auth`]: 인증 미들웨어가 요청에 심는 사용자 정보와 인증 모드
//! - [`token`]: JWT 클레임과 토큰 쌍
//! - [`account`]: 검증된 소셜 신원과 계정 확인 결과

pub mod account;
pub mod auth;
pub mod token;

pub use account::{AccountResolution, SocialIdentity};
pub use auth::{AuthMode, AuthenticatedUser, RequiredRole};
pub use token::{TokenClaims, TokenPair, TokenType};
