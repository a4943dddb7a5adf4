//! Application state - shared across all handlers.

use std::sync::Arc;

use blogly_core::ports::{PostRepository, TagRepository, UserRepository};
use blogly_core::services::{PostService, TagService, UserService};
use blogly_infra::{SeaOrmPostRepository, SeaOrmTagRepository, SeaOrmUserRepository};
use sea_orm::DbConn;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub posts: PostService,
    pub tags: TagService,
}

impl AppState {
    /// Wire the repositories over `db` into the domain services.
    pub fn new(db: DbConn) -> Self {
        let db = Arc::new(db);
        let users: Arc<dyn UserRepository> = Arc::new(SeaOrmUserRepository::new(db.clone()));
        let posts: Arc<dyn PostRepository> = Arc::new(SeaOrmPostRepository::new(db.clone()));
        let tags: Arc<dyn TagRepository> = Arc::new(SeaOrmTagRepository::new(db));

        tracing::info!("Application state initialized");

        Self {
            users: UserService::new(users.clone(), posts.clone()),
            posts: PostService::new(users, posts.clone(), tags.clone()),
            tags: TagService::new(tags, posts),
        }
    }
}
