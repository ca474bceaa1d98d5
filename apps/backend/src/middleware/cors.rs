use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware for the public API:
/// - any origin may call, answered with a literal wildcard
/// - the header and method lists are the API's explicit contract
pub fn cors_middleware() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "PUT", "PATCH", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(3600)
}
