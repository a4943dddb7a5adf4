use std::sync::Arc;

use crate::domain::{Id, Post, User, UserDraft};
use crate::error::DomainError;
use crate::ports::{PostRepository, UserRepository};

/// A user together with the posts they wrote.
#[derive(Debug, Clone)]
pub struct UserDetail {
    pub user: User,
    pub posts: Vec<Post>,
}

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { users, posts }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.list_all().await?)
    }

    pub async fn get_user(&self, id: Id) -> Result<User, DomainError> {
        Ok(self.users.get(id).await?)
    }

    pub async fn show_user(&self, id: Id) -> Result<UserDetail, DomainError> {
        let user = self.users.get(id).await?;
        let posts = self.posts.list_for_user(id).await?;
        Ok(UserDetail { user, posts })
    }

    pub async fn create_user(&self, draft: UserDraft) -> Result<User, DomainError> {
        let user = self.users.create(draft).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub async fn edit_user(&self, id: Id, draft: UserDraft) -> Result<User, DomainError> {
        let mut user = self.users.get(id).await?;
        user.apply(draft);
        Ok(self.users.update(user).await?)
    }

    /// Delete a user and, with it, every post they wrote.
    pub async fn delete_user(&self, id: Id) -> Result<(), DomainError> {
        self.users.delete(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
