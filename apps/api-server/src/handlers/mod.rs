//! HTTP handlers and route configuration.

mod health;
mod posts;
mod users;

#[cfg(test)]
mod tests;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // User routes
            .service(
                web::scope("/users")
                    .route("/sign-up", web::post().to(users::sign_up))
                    .route("/sign-in", web::post().to(users::sign_in)),
            )
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::put().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post)),
            ),
    );
}
