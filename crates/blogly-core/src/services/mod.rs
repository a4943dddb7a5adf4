//! Use-case operations invoked by request handlers.
//!
//! Each operation is a thin composition of repository calls: referenced ids
//! are resolved first (failing with `DomainError::NotFound`), then the read or
//! mutation runs and its result is returned for rendering.

mod posts;
mod tags;
mod users;

pub use posts::{PostDetail, PostEditor, PostService};
pub use tags::{TagDetail, TagEditor, TagService};
pub use users::{UserDetail, UserService};

/// Number of posts shown on the homepage.
pub const RECENT_POSTS_LIMIT: u64 = 5;
