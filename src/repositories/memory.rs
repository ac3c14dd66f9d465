//! 인메모리 리포지토리
//!
//! MongoDB 없이 서비스와 HTTP 계층을 테스트하기 위한 구현체입니다.
//! MongoDB 구현과 같은 유니크 제약을 지키며, 호출 횟수를 기록하여
//! "검증 실패 시 저장소에 접근하지 않는다" 같은 성질을 확인할 수 있습니다.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::config::SocialProvider;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::{Review, SocialAccount, User};
use crate::repositories::reviews::ReviewRepository;
use crate::repositories::social_accounts::SocialAccountRepository;
use crate::repositories::users::UserRepository;

/// 읽기/쓰기 호출 횟수
#[derive(Debug, Default)]
pub struct AccessCounter {
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl AccessCounter {
    fn read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }

    fn write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> AppResult<MutexGuard<'_, T>> {
    mutex.lock().context("인메모리 저장소 잠금 실패")
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<ObjectId, User>>,
    pub counter: AccessCounter,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().map(|users| users.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 카운터를 거치지 않고 저장된 사용자를 조회합니다.
    pub fn snapshot(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .ok()
            .and_then(|users| users.values().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.counter.read();
        let users = lock(&self.users)?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.counter.read();
        Ok(lock(&self.users)?.get(id).cloned())
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        self.counter.write();
        let mut users = lock(&self.users)?;

        if users.values().any(|u| u.email == user.email && u.id != user.id) {
            return Err(AppError::ConflictError("이미 가입된 이메일입니다".to_string()));
        }

        let id = match user.id {
            Some(id) if users.contains_key(&id) => id,
            Some(id) => return Err(AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id))),
            None => ObjectId::new(),
        };
        user.id = Some(id);
        users.insert(id, user.clone());

        Ok(user)
    }
}

#[derive(Debug, Default)]
pub struct InMemorySocialAccountRepository {
    accounts: Mutex<Vec<SocialAccount>>,
    pub counter: AccessCounter,
}

impl InMemorySocialAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.lock().map(|accounts| accounts.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn accounts_of(&self, user_id: &ObjectId) -> Vec<SocialAccount> {
        self.accounts
            .lock()
            .map(|accounts| accounts.iter().filter(|a| a.is_owned_by(user_id)).cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SocialAccountRepository for InMemorySocialAccountRepository {
    async fn find_by_social_key_and_provider(
        &self,
        social_key: &str,
        provider: SocialProvider,
    ) -> AppResult<Option<SocialAccount>> {
        self.counter.read();
        let accounts = lock(&self.accounts)?;
        Ok(accounts
            .iter()
            .find(|a| a.social_key == social_key && a.provider == provider)
            .cloned())
    }

    async fn save(&self, mut account: SocialAccount) -> AppResult<SocialAccount> {
        self.counter.write();
        let mut accounts = lock(&self.accounts)?;

        if accounts
            .iter()
            .any(|a| a.social_key == account.social_key && a.provider == account.provider)
        {
            return Err(AppError::ConflictError("이미 연결된 소셜 계정입니다".to_string()));
        }

        account.id = Some(ObjectId::new());
        accounts.push(account.clone());

        Ok(account)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryReviewRepository {
    reviews: Mutex<HashMap<ObjectId, Review>>,
    pub counter: AccessCounter,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reviews.lock().map(|reviews| reviews.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Review>> {
        self.counter.read();
        Ok(lock(&self.reviews)?.get(id).cloned())
    }

    async fn save(&self, mut review: Review) -> AppResult<Review> {
        self.counter.write();
        let mut reviews = lock(&self.reviews)?;

        let id = match review.id {
            Some(id) if reviews.contains_key(&id) => id,
            Some(id) => return Err(AppError::NotFound(format!("리뷰를 찾을 수 없습니다: {}", id))),
            None => ObjectId::new(),
        };
        review.id = Some(id);
        reviews.insert(id, review.clone());

        Ok(review)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool> {
        self.counter.write();
        Ok(lock(&self.reviews)?.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_user_email_uniqueness() {
        let repo = InMemoryUserRepository::new();

        repo.save(User::new_social("a@x.com".to_string())).await.unwrap();
        let duplicate = repo.save(User::new_social("a@x.com".to_string())).await;

        assert!(matches!(duplicate, Err(AppError::ConflictError(_))));
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_user_save_updates_existing_document() {
        let repo = InMemoryUserRepository::new();

        let mut user = repo.save(User::new_social("a@x.com".to_string())).await.unwrap();
        user.replace_refresh_token(Some("rt".to_string()));
        repo.save(user.clone()).await.unwrap();

        let stored = repo.find_by_id(&user.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(stored.refresh_token.as_deref(), Some("rt"));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.counter.writes(), 2);
    }

    #[actix_web::test]
    async fn test_social_account_pair_uniqueness() {
        let repo = InMemorySocialAccountRepository::new();
        let user_id = ObjectId::new();

        repo.save(SocialAccount::new(SocialProvider::Kakao, "sk1".into(), user_id)).await.unwrap();
        // 같은 키라도 제공자가 다르면 별개의 계정
        repo.save(SocialAccount::new(SocialProvider::Google, "sk1".into(), user_id)).await.unwrap();
        let duplicate = repo.save(SocialAccount::new(SocialProvider::Kakao, "sk1".into(), ObjectId::new())).await;

        assert!(matches!(duplicate, Err(AppError::ConflictError(_))));
        assert_eq!(repo.accounts_of(&user_id).len(), 2);
    }

    #[actix_web::test]
    async fn test_review_delete() {
        let repo = InMemoryReviewRepository::new();
        let review = repo.save(Review::new(1, ObjectId::new(), 5, "good".into())).await.unwrap();
        let id = review.id.unwrap();

        assert!(repo.delete_by_id(&id).await.unwrap());
        assert!(!repo.delete_by_id(&id).await.unwrap());
        assert!(repo.is_empty());
    }
}
