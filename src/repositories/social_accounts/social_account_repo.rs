//! # 소셜 계정 리포지토리 구현
//!
//! `(social_key, provider)` 복합 유니크 인덱스로 같은 제공자 계정이 두 번 연결되지 않도록 합니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::config::SocialProvider;
use crate::core::errors::{AppError, AppResult};
use crate::db::{Database, SOCIAL_ACCOUNTS_COLLECTION};
use crate::domain::entities::SocialAccount;
use crate::repositories::{map_read_error, map_write_error};

#[async_trait]
pub trait SocialAccountRepository: Send + Sync {
    async fn find_by_social_key_and_provider(
        &self,
        social_key: &str,
        provider: SocialProvider,
    ) -> AppResult<Option<SocialAccount>>;

    /// 새 소셜 계정을 저장합니다. 연결은 생성 후 변경되지 않습니다.
    async fn save(&self, account: SocialAccount) -> AppResult<SocialAccount>;
}

pub struct MongoSocialAccountRepository {
    db: Arc<Database>,
}

impl MongoSocialAccountRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<SocialAccount> {
        self.db.collection::<SocialAccount>(SOCIAL_ACCOUNTS_COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let identity_index = IndexModel::builder()
            .keys(doc! { "social_key": 1, "provider": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("social_key_provider_unique".to_string())
                .build())
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([identity_index, user_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl SocialAccountRepository for MongoSocialAccountRepository {
    async fn find_by_social_key_and_provider(
        &self,
        social_key: &str,
        provider: SocialProvider,
    ) -> AppResult<Option<SocialAccount>> {
        self.collection()
            .find_one(doc! { "social_key": social_key, "provider": provider.as_str() })
            .await
            .map_err(map_read_error)
    }

    async fn save(&self, mut account: SocialAccount) -> AppResult<SocialAccount> {
        let result = self.collection()
            .insert_one(&account)
            .await
            .map_err(|e| map_write_error(e, "이미 연결된 소셜 계정입니다"))?;

        account.id = result.inserted_id.as_object_id();
        log::debug!("소셜 계정 연결: {} -> {}", account.provider, account.user_id);

        Ok(account)
    }
}
