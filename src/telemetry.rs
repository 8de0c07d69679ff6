use prometheus::{register_counter_vec, CounterVec};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

const DEFAULT_LOG_LEVEL: &str = "info";

lazy_static! {
    static ref QUIZ_QUESTIONS_SERVED: CounterVec = register_counter_vec!(
        "quiz_questions_served_total",
        "Number of questions handed out to quizzes",
        &["category"]
    )
    .unwrap();
}

/// Counts one question served to a quiz over `category` (`None` is the
/// every-category quiz).
pub fn record_quiz_question(category: Option<i64>) {
    let label = quiz_label(category);
    QUIZ_QUESTIONS_SERVED
        .with_label_values(&[label.as_str()])
        .inc();
}

fn quiz_label(category: Option<i64>) -> String {
    category.map_or_else(|| "all".to_owned(), |c| c.to_string())
}

/// Installs the global subscriber. `LOG_LEVEL` takes `EnvFilter`
/// directives, `INCLUDE_SPAN_EVENTS=true` adds span enter/exit lines.
pub fn init_tracing() {
    let level = std::env::var("LOG_LEVEL").ok();
    let span_flag = std::env::var("INCLUDE_SPAN_EVENTS").ok();

    tracing_subscriber::registry()
        .with(log_filter(level.as_deref()))
        .with(fmt::layer().with_span_events(span_events(span_flag.as_deref())))
        .init();
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

fn span_events(flag: Option<&str>) -> FmtSpan {
    match flag {
        Some(value) if value.eq_ignore_ascii_case("true") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_events_only_on_explicit_true() {
        assert_eq!(span_events(Some("TRUE")), FmtSpan::ENTER | FmtSpan::EXIT);
        assert_eq!(span_events(Some("yes")), FmtSpan::NONE);
        assert_eq!(span_events(None), FmtSpan::NONE);
    }

    #[test]
    fn bad_log_level_falls_back_to_info() {
        assert_eq!(log_filter(None).to_string(), "info");
        assert_eq!(log_filter(Some("trivia_api=loud")).to_string(), "info");
        assert_eq!(log_filter(Some("debug")).to_string(), "debug");
    }

    #[test]
    fn quiz_labels_name_the_category() {
        assert_eq!(quiz_label(None), "all");
        assert_eq!(quiz_label(Some(4)), "4");
    }
}
