use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{get_all_categories, get_category},
            questions::get_questions_for_category,
        },
        Category, Question,
    },
    server::{
        app::AppState,
        error::ApiError,
        pagination::{paginate, PageQuery},
    },
};

use super::ApiResponse;

#[derive(Serialize)]
struct CategoriesList {
    success: bool,
    categories: Vec<Category>,
}

#[derive(Serialize)]
struct CategoryQuestions {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Category,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesList>> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::BadRequest);
    }
    Ok(Json(CategoriesList {
        success: true,
        categories,
    }))
}

async fn questions_for_category(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Json<CategoryQuestions>> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;

    let questions = get_questions_for_category(&pool, id).await?;
    if questions.is_empty() {
        return Err(ApiError::BadRequest);
    }
    // questions may point at a category row that does not exist
    let current_category = get_category(&pool, id).await?.ok_or(ApiError::NotFound)?;

    Ok(Json(CategoryQuestions {
        success: true,
        total_questions: questions.len(),
        questions: paginate(questions, query.page()),
        current_category,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
        .with_state(state)
}
