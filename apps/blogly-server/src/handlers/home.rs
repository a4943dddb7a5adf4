use actix_web::{HttpResponse, web};

use blogly_core::services::RECENT_POSTS_LIMIT;
use blogly_shared::ApiResponse;
use blogly_shared::views::{PostView, views};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET / - the most recent posts.
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.recent_posts(RECENT_POSTS_LIMIT).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(views::<_, PostView>(posts))))
}
