use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions::get_quiz_candidates, Question},
    server::{
        app::AppState,
        deserializers::{is_truthy, Lenienti64},
        error::ApiError,
    },
    telemetry::record_quiz_question,
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizBody {
    #[serde(default)]
    previous_questions: Option<Vec<Lenienti64>>,
    #[serde(default)]
    quiz_category: Value,
}

#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    question: Option<Question>,
}

/// Stored category a quiz draws from, or `None` for every category.
///
/// Only a numeric `0` selects every category. Any other id, including the
/// string `"0"`, is a quiz index one below the stored category id.
fn quiz_category_filter(quiz_category: &Value) -> ApiResponse<Option<i64>> {
    if !is_truthy(quiz_category) {
        return Err(ApiError::Unprocessable);
    }
    let id = quiz_category.get("id").ok_or(ApiError::Unprocessable)?;
    if id.as_f64() == Some(0.0) {
        return Ok(None);
    }
    let Lenienti64(id) = serde_json::from_value(id.clone()).map_err(ApiError::unprocessable)?;
    id.checked_add(1).map(Some).ok_or(ApiError::Unprocessable)
}

fn pick_one<T>(mut candidates: Vec<T>) -> Option<T> {
    if candidates.is_empty() {
        return None;
    }
    let index = fastrand::usize(..candidates.len());
    Some(candidates.swap_remove(index))
}

async fn next_question(
    State(pool): State<SqlitePool>,
    payload: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResponse<Json<QuizQuestion>> {
    let Json(body) = payload.map_err(ApiError::unprocessable)?;
    let category = quiz_category_filter(&body.quiz_category)?;
    let excluded: Vec<i64> = body
        .previous_questions
        .unwrap_or_default()
        .into_iter()
        .map(|Lenienti64(id)| id)
        .collect();

    let candidates = get_quiz_candidates(&pool, category, &excluded)
        .await
        .map_err(ApiError::unprocessable)?;
    tracing::debug!(
        "Quiz category {category:?} has {} questions left",
        candidates.len()
    );

    let question = pick_one(candidates);
    if question.is_some() {
        record_quiz_question(category);
    }

    Ok(Json(QuizQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn falsy_quiz_category_is_unprocessable() {
        for value in [json!(null), json!(false), json!(0), json!({}), json!("")] {
            assert!(matches!(
                quiz_category_filter(&value),
                Err(ApiError::Unprocessable)
            ));
        }
    }

    #[test]
    fn quiz_category_needs_a_numeric_id() {
        assert!(quiz_category_filter(&json!({"type": "Art"})).is_err());
        assert!(quiz_category_filter(&json!({"id": "art"})).is_err());
        assert!(quiz_category_filter(&json!([1, 2])).is_err());
        assert!(quiz_category_filter(&json!({"id": i64::MAX})).is_err());
    }

    #[test]
    fn only_numeric_zero_selects_every_category() {
        assert_eq!(quiz_category_filter(&json!({"id": 0})).unwrap(), None);
        assert_eq!(quiz_category_filter(&json!({"id": "0"})).unwrap(), Some(1));
        assert_eq!(quiz_category_filter(&json!({"id": 1})).unwrap(), Some(2));
        assert_eq!(
            quiz_category_filter(&json!({"id": "3", "type": "Geography"})).unwrap(),
            Some(4)
        );
    }

    #[test]
    fn pick_one_draws_from_candidates() {
        assert_eq!(pick_one(Vec::<i64>::new()), None);
        assert_eq!(pick_one(vec![7]), Some(7));
        for _ in 0..50 {
            let picked = pick_one(vec![1, 2, 3]).unwrap();
            assert!((1..=3).contains(&picked));
        }
    }
}
