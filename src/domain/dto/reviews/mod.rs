pub mod request;
pub mod response;

pub use request::{CreateReviewRequest, UpdateReviewRequest};
pub use response::{CreateReviewResponse, ReviewResponse};
