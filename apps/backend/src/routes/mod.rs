use actix_web::web;

pub mod categories;
pub mod fields;
pub mod health;
pub mod questions;
pub mod quizzes;

/// Configure application routes for the server and for test harnesses.
///
/// `main.rs` wires these behind the CORS and logging middleware; tests
/// register the same paths without the outer wrappers so that endpoint
/// behavior can be exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Category routes: /categories/**
    cfg.service(web::scope("/categories").configure(categories::configure_routes));

    // Question routes: /questions/**
    cfg.service(web::scope("/questions").configure(questions::configure_routes));

    // Quiz routes: /quizzes
    cfg.service(web::scope("/quizzes").configure(quizzes::configure_routes));
}
