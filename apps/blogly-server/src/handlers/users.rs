//! User handlers.

use actix_web::{HttpResponse, web};

use blogly_core::domain::Id;
use blogly_shared::views::{UserDetailView, UserFormView, UserView, views};
use blogly_shared::{ApiResponse, UserForm};

use super::redirect;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list_users().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(views::<_, UserView>(users))))
}

/// GET /users/new
pub async fn new_form() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(UserFormView { user: None }))
}

/// POST /users/new
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<UserForm>,
) -> AppResult<HttpResponse> {
    state.users.create_user(form.into_inner().into()).await?;

    Ok(redirect("/users"))
}

/// GET /users/{id}
pub async fn show(state: web::Data<AppState>, id: web::Path<Id>) -> AppResult<HttpResponse> {
    let detail = state.users.show_user(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(UserDetailView::from(detail))))
}

/// GET /users/{id}/edit
pub async fn edit_form(state: web::Data<AppState>, id: web::Path<Id>) -> AppResult<HttpResponse> {
    let user = state.users.get_user(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(UserFormView {
        user: Some(user.into()),
    })))
}

/// POST /users/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Id>,
    form: web::Form<UserForm>,
) -> AppResult<HttpResponse> {
    state
        .users
        .edit_user(id.into_inner(), form.into_inner().into())
        .await?;

    Ok(redirect("/users"))
}

/// POST /users/{id}/delete
pub async fn delete(state: web::Data<AppState>, id: web::Path<Id>) -> AppResult<HttpResponse> {
    state.users.delete_user(id.into_inner()).await?;

    Ok(redirect("/users"))
}
