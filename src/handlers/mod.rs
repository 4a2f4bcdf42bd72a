use actix_web::web;
use crate::error::AppError;

pub mod api;
pub mod pages;

/// Register every route on an app or test service
pub fn routes(cfg: &mut web::ServiceConfig) {
    // Query strings that fail to deserialize get the same JSON error body as other client errors
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadQuery(err.to_string()).into());

    cfg.app_data(query_config)
        .service(pages::index)
        .service(pages::cards)
        .service(api::list_words)
        .service(api::get_stats)
        .service(api::flashcards)
        .service(api::random_card);
}
