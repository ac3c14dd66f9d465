//! Social Account Entity Module
//!
//! 소셜 로그인 제공자 계정과 사용자 사이의 연결 엔티티를 정의합니다.

pub mod social_account;
