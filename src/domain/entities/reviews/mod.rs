//! Review Entity Module
//!
//! 레시피 리뷰 엔티티를 정의합니다.

pub mod review;
