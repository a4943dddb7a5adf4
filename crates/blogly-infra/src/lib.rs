//! # Blogly Infrastructure
//!
//! Concrete implementations of the ports defined in `blogly-core`.
//! This crate owns the table definitions, constraints and relationship
//! wiring for users, posts and tags.
//!
//! ## Feature Flags
//!
//! PostgreSQL support is always compiled in.
//!
//! - `sqlite` - SQLite support, used for in-memory databases

pub mod database;

pub use database::{
    DatabaseConfig, SeaOrmPostRepository, SeaOrmTagRepository, SeaOrmUserRepository,
};
