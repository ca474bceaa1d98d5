//! Category routes: listing and per-category question listing.

use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::domain::pagination::{paginate, parse_page};
use crate::error::AppError;
use crate::repos::{categories, questions};
use crate::routes::questions::{PageQuery, QuestionResponse};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct CategoryListResponse {
    success: bool,
    categories: BTreeMap<i32, String>,
    total_categories: usize,
}

async fn list_categories(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let all = categories::list_all(&app_state.db).await?;
    if all.is_empty() {
        return Err(AppError::not_found("no categories in store"));
    }

    Ok(HttpResponse::Ok().json(CategoryListResponse {
        success: true,
        categories: categories::name_map(&all),
        total_categories: all.len(),
    }))
}

#[derive(Debug, Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<QuestionResponse>,
    total_questions: usize,
    current_category: i32,
}

/// GET /categories/{id}/questions
///
/// The category id is compared against the stored text form of the
/// `category` column. An empty page is 404, whether the category is unknown
/// or just exhausted.
async fn list_questions_in_category(
    path: web::Path<i32>,
    query: web::Query<PageQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let category_id = path.into_inner();
    let page = parse_page(query.page.as_deref());

    let matches = questions::list_by_category(&app_state.db, &category_id.to_string()).await?;
    let current = paginate(&matches, page);
    if current.is_empty() {
        return Err(AppError::not_found(format!(
            "no questions on page {page} for category {category_id}"
        )));
    }

    Ok(HttpResponse::Ok().json(CategoryQuestionsResponse {
        success: true,
        questions: current
            .iter()
            .cloned()
            .map(QuestionResponse::from)
            .collect(),
        total_questions: matches.len(),
        current_category: category_id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list_categories)));
    cfg.service(web::resource("/{id}/questions").route(web::get().to(list_questions_in_category)));
}
