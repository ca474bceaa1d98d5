//! Quiz route: random next-question selection.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::quiz;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::questions;
use crate::routes::fields::IntOrText;
use crate::routes::questions::QuestionResponse;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    // Id 0 is the wildcard meaning "all categories". Clients also send a
    // `type` name alongside; it is ignored, the id alone governs.
    #[serde(default)]
    pub id: Option<IntOrText>,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Option<Vec<i32>>,
}

#[derive(Debug, Serialize)]
struct QuizResponse {
    success: bool,
    question: Option<QuestionResponse>,
}

/// POST /quizzes
///
/// Stateless read-and-select: the client tracks `previous_questions` across
/// calls. An exhausted pool yields `question: null`, not an error.
async fn next_question(
    body: ValidatedJson<QuizRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();

    let quiz_category = payload
        .quiz_category
        .ok_or_else(|| AppError::unprocessable("quiz_category key missing"))?;
    let previous_questions = payload
        .previous_questions
        .ok_or_else(|| AppError::unprocessable("previous_questions key missing"))?;
    let category_id = quiz_category
        .id
        .as_ref()
        .and_then(IntOrText::as_i32)
        .ok_or_else(|| AppError::unprocessable("quiz_category.id missing or not an integer"))?;

    let filter = quiz::category_filter(category_id);
    let pool = questions::list_pool(&app_state.db, filter.as_deref(), &previous_questions).await?;

    let question = quiz::draw_question(&pool, &mut rand::rng())
        .cloned()
        .map(QuestionResponse::from);

    Ok(HttpResponse::Ok().json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(next_question)));
}
