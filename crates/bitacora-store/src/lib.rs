//! Query layer for the Bitácora blog content store.
//!
//! This crate provides:
//! - Typed row structs for posts, comments, and categories
//! - Listing filters with the pagination clamping policy
//! - Parameterized query construction against the relational store
//! - Schema bootstrap for tests and local development
//!
//! The store itself is owned by the publishing side of the platform; this
//! crate only reads it. All operations go through [`BlogStore`], which holds
//! the connection behind a mutex and scopes each query to a single lock.

mod error;
mod model;
pub mod schema;
mod store;

pub use error::{Result, StoreError};
pub use model::{
    CategoryRow, CommentRow, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PostFilter, PostRow,
};
pub use store::{BlogStore, PostPage};
