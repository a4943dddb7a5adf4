//! Domain entities - the core business objects.

mod post;
mod tag;
mod user;

pub use post::{Post, PostDraft};
pub use tag::{Tag, TagDraft};
pub use user::{User, UserDraft};

/// Primary key type shared by every entity.
pub type Id = i32;

/// A persisted record type with identity.
pub trait Entity {
    /// Name used when reporting a missing row.
    const NAME: &'static str;
}
