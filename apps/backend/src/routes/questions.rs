//! Question routes: paginated listing, creation, deletion, and search.

use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::adapters::questions_sea::QuestionCreate;
use crate::domain::pagination::{paginate, parse_page};
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::questions::Question;
use crate::repos::{categories, questions};
use crate::routes::fields::IntOrText;
use crate::state::app_state::AppState;

/// A question as every endpoint serializes it.
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: String,
}

impl From<Question> for QuestionResponse {
    fn from(value: Question) -> Self {
        Self {
            id: value.id,
            question: value.question,
            answer: value.answer,
            difficulty: value.difficulty,
            category: value.category,
        }
    }
}

/// The raw `page` query parameter. Kept as text so bad values can fall back
/// to page 1 instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
struct QuestionListResponse {
    success: bool,
    questions: Vec<QuestionResponse>,
    total_questions: usize,
    categories: BTreeMap<i32, String>,
    current_category: Option<i32>,
}

async fn list_questions(
    query: web::Query<PageQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let page = parse_page(query.page.as_deref());

    let selection = questions::list_all(&app_state.db).await?;
    let current = paginate(&selection, page);
    if current.is_empty() {
        return Err(AppError::not_found(format!("no questions on page {page}")));
    }

    let all_categories = categories::list_all(&app_state.db).await?;

    Ok(HttpResponse::Ok().json(QuestionListResponse {
        success: true,
        questions: current
            .iter()
            .cloned()
            .map(QuestionResponse::from)
            .collect(),
        total_questions: selection.len(),
        categories: categories::name_map(&all_categories),
        current_category: None,
    }))
}

#[derive(Debug, Serialize)]
struct DeleteQuestionResponse {
    success: bool,
    deleted: i32,
    total_qts: u64,
}

async fn remove_question(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    questions::delete_question(&app_state.db, id).await?;
    let total_qts = questions::count(&app_state.db).await?;

    tracing::info!(question_id = id, "question deleted");

    Ok(HttpResponse::Ok().json(DeleteQuestionResponse {
        success: true,
        deleted: id,
        total_qts,
    }))
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub difficulty: Option<IntOrText>,
    #[serde(default)]
    pub category: Option<IntOrText>,
}

#[derive(Debug, Serialize)]
struct CreateQuestionResponse {
    success: bool,
    created: i32,
    new_question: String,
    tot_questions: u64,
}

async fn new_question(
    body: ValidatedJson<CreateQuestionRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let dto = validate_new_question(body.into_inner())?;

    let created = questions::create_question(&app_state.db, dto).await?;
    let tot_questions = questions::count(&app_state.db).await?;

    tracing::info!(question_id = created.id, "question created");

    Ok(HttpResponse::Ok().json(CreateQuestionResponse {
        success: true,
        created: created.id,
        new_question: created.question,
        tot_questions,
    }))
}

/// All four fields must be present and non-empty, and `difficulty` must be
/// an integer. Violations map to this API's repurposed 405.
fn validate_new_question(payload: CreateQuestionRequest) -> Result<QuestionCreate, AppError> {
    let question = payload
        .question
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::method_not_allowed("question text missing or empty"))?;
    let answer = payload
        .answer
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::method_not_allowed("answer missing or empty"))?;
    let difficulty = payload
        .difficulty
        .filter(|d| !d.is_empty())
        .and_then(|d| d.as_i32())
        .ok_or_else(|| AppError::method_not_allowed("difficulty missing or not an integer"))?;
    let category = payload
        .category
        .filter(|c| !c.is_empty())
        .map(|c| c.to_text())
        .ok_or_else(|| AppError::method_not_allowed("category missing or empty"))?;

    Ok(QuestionCreate::new(question, answer, difficulty, category))
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    success: bool,
    questions: Vec<QuestionResponse>,
    total_questions: usize,
    current_category: Option<i32>,
}

async fn find_questions(
    body: ValidatedJson<SearchRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    // An absent or empty term 404s before any query runs.
    let term = body
        .into_inner()
        .search_term
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::not_found("empty search term"))?;

    let matches = questions::search(&app_state.db, &term).await?;
    let total_questions = matches.len();

    Ok(HttpResponse::Ok().json(SearchResponse {
        success: true,
        questions: matches.into_iter().map(QuestionResponse::from).collect(),
        total_questions,
        current_category: None,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_questions))
            .route(web::post().to(new_question)),
    );
    cfg.service(web::resource("/search").route(web::post().to(find_questions)));
    cfg.service(web::resource("/{id}").route(web::delete().to(remove_question)));
}
