//! 소셜 로그인부터 리뷰 관리까지의 HTTP 흐름 테스트
//!
//! 인메모리 리포지토리로 `ServiceRegistry`를 구성하므로 MongoDB 없이 실행됩니다.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, App};
use serde_json::{json, Value};

use costcook_backend::core::registry::ServiceRegistry;
use costcook_backend::repositories::memory::{
    InMemoryReviewRepository, InMemorySocialAccountRepository, InMemoryUserRepository,
};
use costcook_backend::services::auth::TokenService;

struct Stores {
    users: Arc<InMemoryUserRepository>,
    accounts: Arc<InMemorySocialAccountRepository>,
    reviews: Arc<InMemoryReviewRepository>,
}

fn registry() -> (ServiceRegistry, Stores) {
    let stores = Stores {
        users: Arc::new(InMemoryUserRepository::new()),
        accounts: Arc::new(InMemorySocialAccountRepository::new()),
        reviews: Arc::new(InMemoryReviewRepository::new()),
    };

    let registry = ServiceRegistry::from_repositories(
        stores.users.clone(),
        stores.accounts.clone(),
        stores.reviews.clone(),
        Arc::new(TokenService::new("integration-secret", 60, 14)),
    );

    (registry, stores)
}

/// 로그인 요청을 보내고 (상태 코드, 본문, refreshToken 쿠키 값)을 돌려줍니다.
macro_rules! login {
    ($app:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json($body)
            .to_request();
        let resp = test::call_service($app, req).await;
        let status = resp.status();
        let refresh = resp
            .response()
            .cookies()
            .find(|c| c.name() == "refreshToken")
            .map(|c| c.value().to_string());
        let body: Value = test::read_body_json(resp).await;
        (status, body, refresh)
    }};
}

macro_rules! bearer {
    ($token:expr) => {
        ("Authorization", format!("Bearer {}", $token))
    };
}

#[actix_web::test]
async fn test_health_check() {
    let (registry, _) = registry();
    let app = test::init_service(App::new().configure(|cfg| registry.configure(cfg))).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_first_login_creates_account_and_sets_cookies() {
    let (registry, stores) = registry();
    let app = test::init_service(App::new().configure(|cfg| registry.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "a@x.com", "socialKey": "sk1", "provider": "kakao" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let refresh_cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "refreshToken")
        .map(|c| c.into_owned())
        .expect("refreshToken cookie");
    assert_eq!(refresh_cookie.http_only(), Some(true));
    assert_eq!(refresh_cookie.path(), Some("/"));
    assert!(resp.response().cookies().any(|c| c.name() == "accessToken"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "회원가입 후 로그인이 완료되었습니다.");
    assert_eq!(body["isNewUser"], true);
    assert!(!body["accessToken"].as_str().unwrap().is_empty());
    // 리프레시 토큰은 본문에 없음
    assert!(body.get("refreshToken").is_none());

    assert_eq!(stores.users.len(), 1);
    assert_eq!(stores.accounts.len(), 1);

    let stored = stores.users.snapshot("a@x.com").unwrap();
    assert_eq!(stored.refresh_token.as_deref(), Some(refresh_cookie.value()));
}

#[actix_web::test]
async fn test_missing_field_and_invalid_provider() {
    let (registry, stores) = registry();
    let app = test::init_service(App::new().configure(|cfg| registry.configure(cfg))).await;

    let (status, body, refresh) = login!(&app, json!({ "email": "a@x.com", "socialKey": "sk1" }));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_FIELD");
    assert!(refresh.is_none());

    let (status, body, _) = login!(&app, json!({ "email": "", "socialKey": "sk1", "provider": "kakao" }));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_FIELD");

    let (status, body, _) = login!(&app, json!({ "email": "a@x.com", "socialKey": "sk1", "provider": "naver" }));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PROVIDER");

    assert_eq!(stores.users.counter.reads() + stores.users.counter.writes(), 0);
    assert_eq!(stores.accounts.counter.reads() + stores.accounts.counter.writes(), 0);
}

#[actix_web::test]
async fn test_returning_user_and_new_provider_link() {
    let (registry, stores) = registry();
    let app = test::init_service(App::new().configure(|cfg| registry.configure(cfg))).await;

    let triple = json!({ "email": "a@x.com", "socialKey": "sk1", "provider": "kakao" });
    login!(&app, &triple);
    let (status, body, _) = login!(&app, &triple);

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isNewUser"], false);
    assert_eq!(body["message"], "로그인에 성공했습니다.");
    assert_eq!(stores.accounts.len(), 1);

    let (_, body, _) = login!(&app, json!({ "email": "a@x.com", "socialKey": "g-1", "provider": "google" }));
    assert_eq!(body["isNewUser"], false);
    assert_eq!(stores.users.len(), 1);
    assert_eq!(stores.accounts.len(), 2);
}

#[actix_web::test]
async fn test_refresh_rotation_and_logout() {
    let (registry, _) = registry();
    let app = test::init_service(App::new().configure(|cfg| registry.configure(cfg))).await;

    let (_, body, refresh) = login!(&app, json!({ "email": "a@x.com", "socialKey": "sk1", "provider": "kakao" }));
    let first_refresh = refresh.unwrap();
    let access = body["accessToken"].as_str().unwrap().to_string();

    // 쿠키로 재발급
    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .cookie(actix_web::cookie::Cookie::new("refreshToken", first_refresh.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let second_refresh = resp
        .response()
        .cookies()
        .find(|c| c.name() == "refreshToken")
        .map(|c| c.value().to_string())
        .unwrap();
    assert_ne!(second_refresh, first_refresh);

    // 교체된 토큰은 본문으로 보내도 거절
    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .set_json(json!({ "refreshToken": first_refresh }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    // 로그아웃은 인증 필요
    let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/auth/logout")
        .insert_header(bearer!(access))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.response().cookies().all(|c| c.value().is_empty()));

    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .set_json(json!({ "refreshToken": second_refresh }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_profile_read_and_update() {
    let (registry, _) = registry();
    let app = test::init_service(App::new().configure(|cfg| registry.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/api/users/me").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let (_, body, _) = login!(&app, json!({ "email": "a@x.com", "socialKey": "sk1", "provider": "kakao" }));
    let access = body["accessToken"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri("/api/users/me")
        .insert_header(bearer!(access))
        .set_json(json!({ "nickname": "요리왕", "preferredIngredients": [1, 2], "personalInfoAgreement": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/users/me")
        .insert_header(bearer!(access))
        .to_request();
    let profile: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(profile["email"], "a@x.com");
    assert_eq!(profile["nickname"], "요리왕");
    assert_eq!(profile["preferredIngredients"], json!([1, 2]));
    assert!(profile.get("refreshToken").is_none());

    let req = test::TestRequest::patch()
        .uri("/api/users/me")
        .insert_header(bearer!(access))
        .set_json(json!({ "dislikedIngredients": [2] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_review_ownership() {
    let (registry, stores) = registry();
    let app = test::init_service(App::new().configure(|cfg| registry.configure(cfg))).await;

    let (_, author, _) = login!(&app, json!({ "email": "author@x.com", "socialKey": "k-1", "provider": "kakao" }));
    let (_, other, _) = login!(&app, json!({ "email": "other@x.com", "socialKey": "g-2", "provider": "google" }));
    let author_token = author["accessToken"].as_str().unwrap().to_string();
    let other_token = other["accessToken"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/reviews")
        .insert_header(bearer!(author_token))
        .set_json(json!({ "recipeId": 42, "score": 5, "comment": "가성비 최고" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let review_id = created["reviewId"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/reviews")
        .insert_header(bearer!(author_token))
        .set_json(json!({ "recipeId": 42, "score": 9, "comment": "x" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let uri = format!("/api/reviews/{}", review_id);

    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(bearer!(other_token))
        .set_json(json!({ "score": 1 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(bearer!(author_token))
        .set_json(json!({ "comment": "두 번째 만들어도 맛있음" }))
        .to_request();
    let modified: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(modified["score"], 5);
    assert_eq!(modified["comment"], "두 번째 만들어도 맛있음");

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer!(other_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);
    assert_eq!(stores.reviews.len(), 1);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer!(author_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer!(author_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}
