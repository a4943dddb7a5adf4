//! HTTP handlers and route configuration.

mod health;
mod home;
mod posts;
mod tags;
mod users;


use actix_web::{HttpResponse, http::header, web};

use crate::middleware::error::form_error;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(form_error))
        .route("/", web::get().to(home::index))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/users")
                .route("", web::get().to(users::list))
                .route("/new", web::get().to(users::new_form))
                .route("/new", web::post().to(users::create))
                .route("/{id}", web::get().to(users::show))
                .route("/{id}/edit", web::get().to(users::edit_form))
                .route("/{id}/edit", web::post().to(users::update))
                .route("/{id}/delete", web::post().to(users::delete))
                .route("/{id}/posts/new", web::get().to(posts::new_form))
                .route("/{id}/posts/new", web::post().to(posts::create)),
        )
        .service(
            web::scope("/posts")
                .route("/{id}", web::get().to(posts::show))
                .route("/{id}/edit", web::get().to(posts::edit_form))
                .route("/{id}/edit", web::post().to(posts::update))
                .route("/{id}/delete", web::post().to(posts::delete)),
        )
        .service(
            web::scope("/tags")
                .route("", web::get().to(tags::list))
                .route("/new", web::get().to(tags::new_form))
                .route("/new", web::post().to(tags::create))
                .route("/{id}", web::get().to(tags::show))
                .route("/{id}/edit", web::get().to(tags::edit_form))
                .route("/{id}/edit", web::post().to(tags::update))
                .route("/{id}/delete", web::post().to(tags::delete)),
        );
}

/// `302 Found` pointing at `location`.
fn redirect(location: impl Into<String>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.into()))
        .finish()
}
