//! # 사용자 프로필 서비스

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::has_overlap;
use crate::domain::dto::users::{UserResponse, UserUpdateRequest};
use crate::domain::entities::User;
use crate::repositories::users::UserRepository;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    async fn load(&self, user_id: &ObjectId) -> AppResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    pub async fn get_user(&self, user_id: &ObjectId) -> AppResult<UserResponse> {
        Ok(UserResponse::from(self.load(user_id).await?))
    }

    /// 프로필을 수정합니다. 보내지 않은 필드는 그대로 유지됩니다.
    pub async fn update_user(&self, user_id: &ObjectId, request: UserUpdateRequest) -> AppResult<UserResponse> {
        request.validate()?;

        let mut user = self.load(user_id).await?;

        let UserUpdateRequest {
            nickname,
            profile_image_url,
            preferred_ingredients,
            disliked_ingredients,
            personal_info_agreement,
        } = request;

        let preferred = preferred_ingredients.unwrap_or_else(|| user.preferred_ingredients.clone());
        let disliked = disliked_ingredients.unwrap_or_else(|| user.disliked_ingredients.clone());

        // 한쪽만 보낸 경우 저장된 다른 쪽과 겹칠 수 있음
        if has_overlap(&preferred, &disliked) {
            return Err(AppError::ValidationError(
                "같은 재료를 선호와 비선호에 동시에 지정할 수 없습니다".to_string(),
            ));
        }

        if let Some(nickname) = nickname {
            user.nickname = Some(nickname);
        }
        if let Some(url) = profile_image_url {
            user.profile_image_url = Some(url);
        }
        if let Some(agreement) = personal_info_agreement {
            user.personal_info_agreement = agreement;
        }
        user.preferred_ingredients = preferred;
        user.disliked_ingredients = disliked;
        user.touch();

        let saved = self.user_repo.save(user).await?;
        log::info!("프로필 수정: {}", user_id);

        Ok(UserResponse::from(saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryUserRepository;

    async fn setup() -> (Arc<InMemoryUserRepository>, UserService, ObjectId) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user = repo.save(User::new_social("a@x.com".to_string())).await.unwrap();
        let service = UserService::new(repo.clone());

        (repo, service, user.id.unwrap())
    }

    #[actix_web::test]
    async fn test_get_user() {
        let (_, service, id) = setup().await;

        let user = service.get_user(&id).await.unwrap();
        assert_eq!(user.email, "a@x.com");

        assert!(matches!(service.get_user(&ObjectId::new()).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_partial_update_keeps_other_fields() {
        let (repo, service, id) = setup().await;

        service.update_user(&id, UserUpdateRequest {
            nickname: Some("요리왕".to_string()),
            preferred_ingredients: Some(vec![1, 2]),
            ..Default::default()
        }).await.unwrap();

        let updated = service.update_user(&id, UserUpdateRequest {
            personal_info_agreement: Some(true),
            ..Default::default()
        }).await.unwrap();

        assert_eq!(updated.nickname.as_deref(), Some("요리왕"));
        assert_eq!(updated.preferred_ingredients, vec![1, 2]);
        assert!(updated.personal_info_agreement);

        let stored = repo.snapshot("a@x.com").unwrap();
        assert!(stored.updated_at >= stored.created_at);
    }

    #[actix_web::test]
    async fn test_disliked_may_not_overlap_stored_preferred() {
        let (_, service, id) = setup().await;

        service.update_user(&id, UserUpdateRequest {
            preferred_ingredients: Some(vec![7]),
            ..Default::default()
        }).await.unwrap();

        let result = service.update_user(&id, UserUpdateRequest {
            disliked_ingredients: Some(vec![7]),
            ..Default::default()
        }).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
