#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;
use trivia_api::db::queries::{categories::import_categories, questions::import_questions};
use trivia_api::db::{establish_in_memory, run_migrations, Category, Question};
use trivia_api::server::app::{build_router, AppState};

pub const CATEGORY_TYPES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

pub struct TestApp {
    pub pool: SqlitePool,
    pub router: Router,
}

impl TestApp {
    /// Empty, migrated store.
    pub async fn empty() -> Self {
        let pool = establish_in_memory().await.unwrap();
        run_migrations(&pool).await.unwrap();
        let router = build_router(AppState::new(pool.clone()));
        TestApp { pool, router }
    }

    /// Six categories and `count` questions with ids 1..=count, cycling
    /// through the categories.
    pub async fn seeded(count: i64) -> Self {
        let app = Self::empty().await;
        app.add_categories().await;
        let questions = (1..=count)
            .map(|id| question(id, &format!("Question number {id}?"), (id - 1) % 6 + 1))
            .collect();
        import_questions(&app.pool, questions).await.unwrap();
        app
    }

    pub async fn add_categories(&self) {
        let categories = CATEGORY_TYPES
            .iter()
            .zip(1..)
            .map(|(kind, id)| Category {
                id,
                kind: kind.to_string(),
            })
            .collect();
        import_categories(&self.pool, categories).await.unwrap();
    }

    pub async fn add_questions(&self, questions: Vec<Question>) {
        import_questions(&self.pool, questions).await.unwrap();
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body.to_owned())).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }
}

pub fn question(id: i64, text: &str, category: i64) -> Question {
    Question {
        id,
        question: text.to_owned(),
        answer: format!("Answer {id}"),
        category,
        difficulty: 1,
    }
}

pub fn ids(body: &Value, key: &str) -> Vec<i64> {
    body[key]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

pub fn assert_error(status: StatusCode, body: &Value, code: u16, message: &str) {
    assert_eq!(status.as_u16(), code, "body: {body}");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], code);
    assert_eq!(body["message"], message);
}
