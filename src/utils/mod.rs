//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 변환 유틸리티
//! - [`cookie_utils`] - 토큰 쿠키 설정/만료

pub mod cookie_utils;
pub mod string_utils;
