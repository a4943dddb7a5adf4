//! # Blogly Core
//!
//! The domain layer of Blogly: users, posts, tags and the operations
//! request handlers invoke on them.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
