//! Tag handlers.

use actix_web::{HttpResponse, web};

use blogly_core::domain::Id;
use blogly_shared::dto::FormPairs;
use blogly_shared::views::{TagDetailView, TagFormView, TagView, views};
use blogly_shared::{ApiResponse, TagForm};

use super::redirect;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /tags
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.tags.list_tags().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(views::<_, TagView>(tags))))
}

/// GET /tags/new
pub async fn new_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let editor = state.tags.new_tag_form().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(TagFormView::from(editor))))
}

/// POST /tags/new
pub async fn create(
    state: web::Data<AppState>,
    body: web::Form<FormPairs>,
) -> AppResult<HttpResponse> {
    let form = TagForm::from_pairs(&body)?;

    state.tags.create_tag(form.draft(), &form.posts).await?;

    Ok(redirect("/tags"))
}

/// GET /tags/{id}
pub async fn show(state: web::Data<AppState>, id: web::Path<Id>) -> AppResult<HttpResponse> {
    let detail = state.tags.show_tag(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(TagDetailView::from(detail))))
}

/// GET /tags/{id}/edit
pub async fn edit_form(state: web::Data<AppState>, id: web::Path<Id>) -> AppResult<HttpResponse> {
    let editor = state.tags.edit_tag_form(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(TagFormView::from(editor))))
}

/// POST /tags/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Id>,
    body: web::Form<FormPairs>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    let form = TagForm::from_pairs(&body)?;

    state.tags.edit_tag(id, form.draft(), &form.posts).await?;

    Ok(redirect(format!("/tags/{id}")))
}

/// POST /tags/{id}/delete
pub async fn delete(state: web::Data<AppState>, id: web::Path<Id>) -> AppResult<HttpResponse> {
    state.tags.delete_tag(id.into_inner()).await?;

    Ok(redirect("/tags"))
}
