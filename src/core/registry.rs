//! # Service Registry
//!
//! 애플리케이션 시작 시 리포지토리와 서비스를 한 번 조립하고,
//! actix-web의 `web::Data`로 등록하는 명시적 의존성 컨테이너입니다.
//!
//! ```text
//! Database ──▶ Mongo*Repository ──▶ AuthService / UserService / ReviewService
//!                                        │
//!                                        ▼
//!                              App::configure(registry.configure)
//! ```
//!
//! 서비스는 trait 객체로 리포지토리를 받으므로, 테스트에서는
//! [`ServiceRegistry::from_repositories`]에 인메모리 구현체를 넘겨 같은 라우트를 구성합니다.
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::with_mongo(database).await?;
//!
//! HttpServer::new(move || {
//!     let registry = registry.clone();
//!     App::new().configure(move |cfg| registry.configure(cfg))
//! })
//! ```

use std::sync::Arc;

use actix_web::web;

use crate::core::errors::AppResult;
use crate::db::Database;
use crate::repositories::reviews::{MongoReviewRepository, ReviewRepository};
use crate::repositories::social_accounts::{MongoSocialAccountRepository, SocialAccountRepository};
use crate::repositories::users::{MongoUserRepository, UserRepository};
use crate::routes::configure_all_routes;
use crate::services::auth::{AuthService, TokenService};
use crate::services::reviews::ReviewService;
use crate::services::users::UserService;

#[derive(Clone)]
pub struct ServiceRegistry {
    pub token_service: Arc<TokenService>,
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub review_service: Arc<ReviewService>,
}

impl ServiceRegistry {
    pub fn from_repositories(
        user_repo: Arc<dyn UserRepository>,
        social_account_repo: Arc<dyn SocialAccountRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        token_service: Arc<TokenService>,
    ) -> Self {
        let auth_service = Arc::new(AuthService::new(
            user_repo.clone(),
            social_account_repo,
            token_service.clone(),
        ));

        Self {
            token_service,
            auth_service,
            user_service: Arc::new(UserService::new(user_repo)),
            review_service: Arc::new(ReviewService::new(review_repo)),
        }
    }

    /// MongoDB 리포지토리로 레지스트리를 만들고 인덱스를 생성합니다.
    ///
    /// 유니크 인덱스 생성에 실패하면 중복 계정을 막을 수 없으므로 시작을 중단합니다.
    pub async fn with_mongo(db: Arc<Database>) -> AppResult<Self> {
        let user_repo = MongoUserRepository::new(db.clone());
        let social_account_repo = MongoSocialAccountRepository::new(db.clone());
        let review_repo = MongoReviewRepository::new(db);

        user_repo.create_indexes().await?;
        social_account_repo.create_indexes().await?;
        review_repo.create_indexes().await?;
        log::info!("✅ MongoDB 인덱스 생성 완료");

        Ok(Self::from_repositories(
            Arc::new(user_repo),
            Arc::new(social_account_repo),
            Arc::new(review_repo),
            Arc::new(TokenService::from_env()),
        ))
    }

    /// 서비스를 앱 데이터로 등록하고 모든 라우트를 설정합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.token_service.clone()))
            .app_data(web::Data::from(self.auth_service.clone()))
            .app_data(web::Data::from(self.user_service.clone()))
            .app_data(web::Data::from(self.review_service.clone()));

        configure_all_routes(cfg);
    }
}
