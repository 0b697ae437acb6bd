//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::web;

use crate::middleware::extract;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(extract::json_config())
        .app_data(extract::query_config())
        .app_data(extract::path_config())
        .route("/", web::get().to(health::welcome))
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                // Post routes
                .service(
                    web::scope("/v1")
                        .service(
                            web::resource(["/posts", "/posts/"])
                                .route(web::get().to(posts::list_posts))
                                .route(web::post().to(posts::create_post)),
                        )
                        .service(
                            web::resource("/posts/{id}")
                                .route(web::get().to(posts::get_post))
                                .route(web::put().to(posts::update_post))
                                .route(web::delete().to(posts::delete_post)),
                        ),
                ),
        );
}
