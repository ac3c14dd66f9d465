pub mod request;
pub mod response;

pub use request::UserUpdateRequest;
pub use response::UserResponse;
