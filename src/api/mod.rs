pub mod homero;
pub mod models;

pub use homero::{ApiError, HomeroClient};
pub use models::*;
