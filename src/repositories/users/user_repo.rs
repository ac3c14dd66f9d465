//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 데이터 액세스를 담당합니다.
//! 이메일 유니크 인덱스가 동시 가입 경합에서 중복 사용자 생성을 막습니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, Collection, IndexModel};

use crate::core::errors::{AppError, AppResult};
use crate::db::{Database, USERS_COLLECTION};
use crate::domain::entities::User;
use crate::repositories::{map_read_error, map_write_error};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// `id`가 없으면 삽입하고, 있으면 문서 전체를 교체합니다.
    ///
    /// 저장된 사용자(할당된 `id` 포함)를 반환합니다.
    async fn save(&self, user: User) -> AppResult<User>;
}

pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(USERS_COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(map_read_error)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(map_read_error)
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        match user.id {
            None => {
                let result = self.collection()
                    .insert_one(&user)
                    .await
                    .map_err(|e| map_write_error(e, "이미 가입된 이메일입니다"))?;

                let id = result.inserted_id.as_object_id().ok_or_else(|| {
                    AppError::InternalError("삽입된 사용자 ID를 확인할 수 없습니다".to_string())
                })?;
                user.id = Some(id);

                log::debug!("사용자 생성: {}", id);
            }
            Some(id) => {
                let result = self.collection()
                    .replace_one(doc! { "_id": id }, &user)
                    .await
                    .map_err(|e| map_write_error(e, "이미 가입된 이메일입니다"))?;

                if result.matched_count == 0 {
                    return Err(AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)));
                }
            }
        }

        Ok(user)
    }
}
