pub mod social_identity;
pub mod resolution;

pub use social_identity::SocialIdentity;
pub use resolution::AccountResolution;
