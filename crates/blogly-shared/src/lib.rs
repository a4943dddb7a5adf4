//! # Blogly Shared
//!
//! Types exchanged over HTTP: parsed form bodies, the view models handed to
//! the presentation layer, and the standard response envelopes.

pub mod dto;
pub mod response;
pub mod views;

pub use dto::{FormError, PostForm, TagForm, UserForm};
pub use response::{ApiResponse, ErrorResponse};
