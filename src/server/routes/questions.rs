use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_all_categories, questions},
        Category, NewQuestion, Question,
    },
    server::{
        app::AppState,
        deserializers::Lenienti64,
        error::ApiError,
        pagination::{paginate, PageQuery},
    },
};

use super::{stored_category, ApiResponse};

#[derive(Deserialize)]
struct NewQuestionBody {
    question: String,
    answer: String,
    difficulty: Lenienti64,
    category: Lenienti64,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(default, rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: Vec<Category>,
}

#[derive(Serialize)]
struct DeletedQuestion {
    success: bool,
    delete: i64,
    questions: Vec<Question>,
    total_questions: usize,
    categories: Vec<Category>,
}

#[derive(Serialize)]
struct CreatedQuestion {
    success: bool,
    created: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

async fn get_questions(
    State(pool): State<SqlitePool>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let questions = questions::get_all_questions(&pool).await?;
    let categories = get_all_categories(&pool).await?;

    let total_questions = questions.len();
    let page = paginate(questions, query.page());
    if page.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionsPage {
        success: true,
        questions: page,
        total_questions,
        categories,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Json<DeletedQuestion>> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;

    questions::get_question_by_id(&pool, id)
        .await
        .map_err(ApiError::unprocessable)?
        .ok_or(ApiError::NotFound)?;
    questions::delete_question(&pool, id)
        .await
        .map_err(ApiError::unprocessable)?;
    tracing::info!("Deleted question {id}");

    let remaining = questions::get_all_questions(&pool)
        .await
        .map_err(ApiError::unprocessable)?;
    let categories = get_all_categories(&pool)
        .await
        .map_err(ApiError::unprocessable)?;

    Ok(Json(DeletedQuestion {
        success: true,
        delete: id,
        total_questions: remaining.len(),
        questions: paginate(remaining, query.page()),
        categories,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    Query(query): Query<PageQuery>,
    payload: Result<Json<NewQuestionBody>, JsonRejection>,
) -> ApiResponse<Json<CreatedQuestion>> {
    let Json(body) = payload.map_err(ApiError::unprocessable)?;
    let category = stored_category(body.category.0)?;

    let created = questions::create_question(
        &pool,
        NewQuestion {
            question: &body.question,
            answer: &body.answer,
            category,
            difficulty: body.difficulty.0,
        },
    )
    .await
    .map_err(ApiError::unprocessable)?;
    tracing::info!("Created question {created} in category {category}");

    let all = questions::get_all_questions(&pool)
        .await
        .map_err(ApiError::unprocessable)?;

    Ok(Json(CreatedQuestion {
        success: true,
        created,
        total_questions: all.len(),
        questions: paginate(all, query.page()),
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    Query(query): Query<PageQuery>,
    payload: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResponse<Json<SearchResults>> {
    let Json(body) = payload.map_err(|_| ApiError::BadRequest)?;
    // an absent or null term is a bad request; only "" matches everything
    let term = body.search_term.ok_or(ApiError::BadRequest)?;

    let found = questions::search_questions(&pool, &term).await?;
    if found.is_empty() {
        return Err(ApiError::BadRequest);
    }

    Ok(Json(SearchResults {
        success: true,
        total_questions: found.len(),
        questions: paginate(found, query.page()),
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(get_questions))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/create", post(create_question))
        .route("/questions/search", post(search_questions))
        .with_state(state)
}
