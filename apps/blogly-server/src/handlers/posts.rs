//! Post handlers.

use actix_web::{HttpResponse, web};

use blogly_core::domain::Id;
use blogly_shared::dto::FormPairs;
use blogly_shared::views::{PostDetailView, PostFormView};
use blogly_shared::{ApiResponse, PostForm};

use super::redirect;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /users/{id}/posts/new
pub async fn new_form(
    state: web::Data<AppState>,
    user_id: web::Path<Id>,
) -> AppResult<HttpResponse> {
    let editor = state.posts.new_post_form(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostFormView::from(editor))))
}

/// POST /users/{id}/posts/new
pub async fn create(
    state: web::Data<AppState>,
    user_id: web::Path<Id>,
    body: web::Form<FormPairs>,
) -> AppResult<HttpResponse> {
    let user_id = user_id.into_inner();
    let form = PostForm::from_pairs(&body)?;

    state
        .posts
        .create_post(user_id, form.draft(), &form.tags)
        .await?;

    Ok(redirect(format!("/users/{user_id}")))
}

/// GET /posts/{id}
pub async fn show(state: web::Data<AppState>, id: web::Path<Id>) -> AppResult<HttpResponse> {
    let detail = state.posts.show_post(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostDetailView::from(detail))))
}

/// GET /posts/{id}/edit
pub async fn edit_form(state: web::Data<AppState>, id: web::Path<Id>) -> AppResult<HttpResponse> {
    let editor = state.posts.edit_post_form(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostFormView::from(editor))))
}

/// POST /posts/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Id>,
    body: web::Form<FormPairs>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    let form = PostForm::from_pairs(&body)?;

    state.posts.edit_post(id, form.draft(), &form.tags).await?;

    Ok(redirect(format!("/posts/{id}")))
}

/// POST /posts/{id}/delete
pub async fn delete(state: web::Data<AppState>, id: web::Path<Id>) -> AppResult<HttpResponse> {
    let user_id = state.posts.delete_post(id.into_inner()).await?;

    Ok(redirect(format!("/users/{user_id}")))
}
