//! # 리뷰 리포지토리 구현

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, Collection, IndexModel};

use crate::core::errors::{AppError, AppResult};
use crate::db::{Database, REVIEWS_COLLECTION};
use crate::domain::entities::Review;
use crate::repositories::{map_read_error, map_write_error};

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Review>>;

    async fn save(&self, review: Review) -> AppResult<Review>;

    /// 삭제된 문서가 있으면 `true`
    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool>;
}

pub struct MongoReviewRepository {
    db: Arc<Database>,
}

impl MongoReviewRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Review> {
        self.db.collection::<Review>(REVIEWS_COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let recipe_index = IndexModel::builder()
            .keys(doc! { "recipe_id": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("recipe_id_created_at".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([recipe_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ReviewRepository for MongoReviewRepository {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Review>> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(map_read_error)
    }

    async fn save(&self, mut review: Review) -> AppResult<Review> {
        match review.id {
            None => {
                let result = self.collection()
                    .insert_one(&review)
                    .await
                    .map_err(|e| map_write_error(e, "리뷰를 저장할 수 없습니다"))?;

                review.id = result.inserted_id.as_object_id();
            }
            Some(id) => {
                let result = self.collection()
                    .replace_one(doc! { "_id": id }, &review)
                    .await
                    .map_err(|e| map_write_error(e, "리뷰를 저장할 수 없습니다"))?;

                if result.matched_count == 0 {
                    return Err(AppError::NotFound(format!("리뷰를 찾을 수 없습니다: {}", id)));
                }
            }
        }

        Ok(review)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
