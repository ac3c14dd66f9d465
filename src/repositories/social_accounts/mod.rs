pub mod social_account_repo;

pub use social_account_repo::{MongoSocialAccountRepository, SocialAccountRepository};
