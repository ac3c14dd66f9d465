pub mod request;
pub mod response;

pub use request::{RefreshTokenRequest, SignUpOrLoginRequest};
pub use response::{RefreshTokenResponse, SignUpOrLoginOutcome, SignUpOrLoginResponse};
