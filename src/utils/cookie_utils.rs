//! # 토큰 쿠키 유틸리티
//!
//! 로그인과 토큰 재발급 응답에 `refreshToken`, `accessToken` 쿠키를 설정하고,
//! 로그아웃 응답에서 만료시킵니다.

use actix_web::cookie::{time::Duration, Cookie, CookieBuilder, SameSite};
use actix_web::HttpResponseBuilder;

use crate::config::CookieConfig;
use crate::domain::models::TokenPair;

pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

fn base_cookie(name: &'static str, value: String) -> CookieBuilder<'static> {
    let builder = Cookie::build(name, value)
        .path("/")
        .secure(CookieConfig::secure())
        .same_site(SameSite::Lax);

    match CookieConfig::domain() {
        Some(domain) => builder.domain(domain),
        None => builder,
    }
}

/// 리프레시 토큰 쿠키 (HttpOnly, 만료 = 리프레시 토큰 유효 기간)
pub fn refresh_token_cookie(token: &str, max_age_seconds: i64) -> Cookie<'static> {
    base_cookie(REFRESH_TOKEN_COOKIE, token.to_string())
        .http_only(true)
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

/// 액세스 토큰 쿠키
///
/// 클라이언트 스크립트가 읽을 수 있도록 HttpOnly를 설정하지 않습니다.
pub fn access_token_cookie(token: &str, max_age_seconds: i64) -> Cookie<'static> {
    base_cookie(ACCESS_TOKEN_COOKIE, token.to_string())
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

pub fn set_token_cookies(response: &mut HttpResponseBuilder, tokens: &TokenPair) {
    response
        .cookie(refresh_token_cookie(&tokens.refresh_token, tokens.refresh_expires_in))
        .cookie(access_token_cookie(&tokens.access_token, tokens.expires_in));
}

/// 두 토큰 쿠키를 즉시 만료시킵니다.
pub fn clear_token_cookies(response: &mut HttpResponseBuilder) {
    for name in [REFRESH_TOKEN_COOKIE, ACCESS_TOKEN_COOKIE] {
        let mut cookie = base_cookie(name, String::new()).finish();
        cookie.make_removal();
        response.cookie(cookie);
    }
}
