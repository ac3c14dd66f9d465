//! # 소셜 로그인 인증 서비스
//!
//! 소셜 로그인 요청 하나로 회원가입과 로그인을 모두 처리합니다.
//!
//! ```text
//! SignUpOrLoginRequest
//!        │  입력 검증 (저장소 접근 전)
//!        ▼
//! SocialIdentity ──▶ 계정 확인 ──▶ 소셜 계정 연결 ──▶ 토큰 발급 및 저장
//!                    (email)        (social_key,        (refresh_token 교체)
//!                                    provider)
//! ```
//!
//! 두 번의 "조회 후 쓰기"는 잠금 없이 수행됩니다.
//! 동시에 같은 신규 사용자가 가입하면 유니크 인덱스가 두 번째 삽입을
//! `ConflictError`로 거절하며, 재시도나 보상 트랜잭션은 하지 않습니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::auth::{SignUpOrLoginOutcome, SignUpOrLoginRequest, SignUpOrLoginResponse};
use crate::domain::entities::{SocialAccount, User};
use crate::domain::models::{AccountResolution, SocialIdentity, TokenPair};
use crate::repositories::social_accounts::SocialAccountRepository;
use crate::repositories::users::UserRepository;
use crate::services::auth::TokenService;

pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    social_account_repo: Arc<dyn SocialAccountRepository>,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        social_account_repo: Arc<dyn SocialAccountRepository>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self { user_repo, social_account_repo, token_service }
    }

    /// 소셜 로그인 (필요하면 회원가입 포함)
    ///
    /// 필드 누락이나 잘못된 제공자는 저장소에 접근하기 전에 거절됩니다.
    /// 호출 한 번에 사용자 삽입 최대 1회, 소셜 계정 삽입 최대 1회, 사용자 갱신 1회가 일어납니다.
    pub async fn sign_up_or_login(&self, request: SignUpOrLoginRequest) -> AppResult<SignUpOrLoginOutcome> {
        let identity = SocialIdentity::parse(
            request.email.as_deref(),
            request.social_key.as_deref(),
            request.provider.as_deref(),
        )?;

        let resolution = self.resolve_account(&identity).await?;
        let is_new_user = resolution.is_created();

        if let AccountResolution::Found(user) = &resolution {
            self.link_social_account(&identity, user).await?;
        }

        let tokens = self.issue_tokens(resolution.into_user()).await?;

        log::info!(
            "소셜 로그인 완료: provider={}, new_user={}",
            identity.provider(),
            is_new_user
        );

        Ok(SignUpOrLoginOutcome {
            body: SignUpOrLoginResponse::new(tokens.access_token.clone(), is_new_user),
            tokens,
        })
    }

    /// 이메일로 사용자를 찾고, 없으면 사용자와 소셜 계정을 함께 만듭니다.
    ///
    /// 소셜 계정이 이미 다른 사용자에게 연결되어 있으면 사용자를 만들기 전에 `ConflictError`로 거절하여
    /// 연결 없는 사용자가 남지 않게 합니다.
    async fn resolve_account(&self, identity: &SocialIdentity) -> AppResult<AccountResolution> {
        if let Some(user) = self.user_repo.find_by_email(identity.email()).await? {
            return Ok(AccountResolution::Found(user));
        }

        let linked = self.social_account_repo
            .find_by_social_key_and_provider(identity.social_key(), identity.provider())
            .await?;
        if let Some(account) = linked {
            log::warn!(
                "신규 가입 거절: 소셜 계정이 이미 다른 사용자에게 연결되어 있습니다: provider={}, owner={}",
                account.provider,
                account.user_id
            );
            return Err(AppError::ConflictError("이미 연결된 소셜 계정입니다".to_string()));
        }

        let user = self.user_repo.save(User::new_social(identity.email().to_string())).await?;
        let user_id = persisted_id(&user)?;

        self.social_account_repo
            .save(SocialAccount::new(identity.provider(), identity.social_key().to_string(), user_id))
            .await?;

        log::info!("신규 사용자 가입: {} ({})", user_id, identity.provider());

        Ok(AccountResolution::Created(user))
    }

    /// 기존 사용자에게 아직 연결되지 않은 소셜 계정이면 연결합니다.
    ///
    /// 같은 `(social_key, provider)`가 이미 있으면 그 계정이 누구에게 연결되어 있든 그대로 둡니다.
    async fn link_social_account(&self, identity: &SocialIdentity, user: &User) -> AppResult<()> {
        let existing = self.social_account_repo
            .find_by_social_key_and_provider(identity.social_key(), identity.provider())
            .await?;

        match existing {
            Some(account) => {
                if let Some(user_id) = user.id {
                    if !account.is_owned_by(&user_id) {
                        log::warn!(
                            "소셜 계정이 다른 사용자에게 연결되어 있습니다: provider={}, owner={}",
                            account.provider,
                            account.user_id
                        );
                    }
                }
            }
            None => {
                let user_id = persisted_id(user)?;
                self.social_account_repo
                    .save(SocialAccount::new(identity.provider(), identity.social_key().to_string(), user_id))
                    .await?;

                log::info!("기존 사용자에 소셜 계정 연결: {} ({})", user_id, identity.provider());
            }
        }

        Ok(())
    }

    /// 토큰 쌍을 발급하고 리프레시 토큰을 사용자에 저장합니다.
    async fn issue_tokens(&self, mut user: User) -> AppResult<TokenPair> {
        let tokens = self.token_service.generate_token_pair(&user)?;

        user.replace_refresh_token(Some(tokens.refresh_token.clone()));
        self.user_repo.save(user).await?;

        Ok(tokens)
    }

    /// 리프레시 토큰으로 토큰 쌍을 재발급합니다.
    ///
    /// 서명과 만료가 유효하더라도 저장된 토큰과 다르면(이미 교체되었거나 로그아웃됨) 거절합니다.
    pub async fn refresh_tokens(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let claims = self.token_service.verify_refresh_token(refresh_token)?;

        let user_id = ObjectId::parse_str(&claims.sub)
            .map_err(|_| AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()))?;

        let user = self.user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string()))?;

        if user.refresh_token.as_deref() != Some(refresh_token) {
            log::warn!("만료되었거나 교체된 리프레시 토큰 사용: {}", user_id);
            return Err(AppError::AuthenticationError("유효하지 않은 리프레시 토큰입니다".to_string()));
        }

        self.issue_tokens(user).await
    }

    /// 저장된 리프레시 토큰을 제거합니다.
    pub async fn logout(&self, user_id: &ObjectId) -> AppResult<()> {
        let mut user = self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        user.replace_refresh_token(None);
        self.user_repo.save(user).await?;

        log::info!("로그아웃: {}", user_id);
        Ok(())
    }
}

fn persisted_id(user: &User) -> AppResult<ObjectId> {
    user.id
        .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))
}
