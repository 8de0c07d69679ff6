mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use super::error::ApiError;

pub type ApiResponse<T> = Result<T, ApiError>;

// Clients number categories one below the stored ids, except for category 1.
fn stored_category(category: i64) -> ApiResponse<i64> {
    if category == 1 {
        return Ok(category);
    }
    category.checked_add(1).ok_or(ApiError::Unprocessable)
}
