//! Integration tests for /questions/search.

use actix_web::{test, web, App};
use backend::routes;
use serde_json::json;

mod common;

async fn seed_corpus(state: &backend::state::app_state::AppState) {
    common::seed_question(state, "Who discovered penicillin?", "Fleming", 1, "1").await;
    common::seed_question(state, "What is the capital of France?", "Paris", 1, "3").await;
    common::seed_question(state, "who wrote Hamlet?", "Shakespeare", 2, "2").await;
}

#[actix_web::test]
async fn test_search_is_case_insensitive_substring_match() {
    let state = common::setup_state().await;
    seed_corpus(&state).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/questions/search")
        .set_json(json!({"searchTerm": "WHO"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let json = common::read_json(resp).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["total_questions"], 2);
    assert_eq!(json["current_category"], serde_json::Value::Null);

    for question in json["questions"].as_array().unwrap() {
        let text = question["question"].as_str().unwrap().to_lowercase();
        assert!(text.contains("who"));
    }
}

#[actix_web::test]
async fn test_search_with_no_matches_is_empty_success() {
    let state = common::setup_state().await;
    seed_corpus(&state).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/questions/search")
        .set_json(json!({"searchTerm": "xyzzy"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let json = common::read_json(resp).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["total_questions"], 0);
    assert!(json["questions"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_search_empty_term_is_404() {
    let state = common::setup_state().await;
    seed_corpus(&state).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/questions/search")
        .set_json(json!({"searchTerm": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    common::assert_error_body(resp, 404, "Page not found").await;
}

#[actix_web::test]
async fn test_search_missing_term_is_404() {
    let state = common::setup_state().await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/questions/search")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    common::assert_error_body(resp, 404, "Page not found").await;
}
