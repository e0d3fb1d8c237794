//! HTTP handlers and route configuration.

mod posts;


use actix_web::web;

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
///
/// Each resource answers unknown methods with the same 404 as unknown paths.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/posts")
            .route(web::get().to(posts::list_posts))
            .route(web::post().to(posts::create_post))
            .default_service(web::to(not_found)),
    )
    .service(
        web::resource("/posts/{id}")
            .route(web::get().to(posts::get_post))
            .route(web::put().to(posts::update_post))
            .route(web::delete().to(posts::delete_post))
            .default_service(web::to(not_found)),
    );
}

/// Fallback for any unmatched method and path.
pub async fn not_found() -> AppResult<&'static str> {
    Err(AppError::NotFound)
}
