//! 계정 확인 단계의 결과

use crate::domain::entities::User;

/// 이메일로 사용자를 찾은 결과
///
/// 신규 가입 여부는 생성 시각이 아니라 어느 경로를 탔는지로만 결정됩니다.
#[derive(Debug, Clone)]
pub enum AccountResolution {
    /// 이번 요청에서 사용자와 소셜 계정을 새로 만들었음
    Created(User),
    /// 기존 사용자를 찾았음
    Found(User),
}

impl AccountResolution {
    pub fn is_created(&self) -> bool {
        matches!(self, AccountResolution::Created(_))
    }

    pub fn into_user(self) -> User {
        match self {
            AccountResolution::Created(user) | AccountResolution::Found(user) => user,
        }
    }
}
