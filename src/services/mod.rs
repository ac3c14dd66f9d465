//! # 서비스 계층
//!
//! 비즈니스 로직을 담당하며 저장소는 trait 객체로만 접근합니다.
//!
//! - [`auth`]: 소셜 로그인(회원가입 겸용), 토큰 재발급, 로그아웃, JWT 발급/검증
//! - [`users`]: 내 정보 조회와 프로필 수정
//! - [`reviews`]: 레시피 리뷰 작성/수정/삭제

pub mod auth;
pub mod reviews;
pub mod users;
