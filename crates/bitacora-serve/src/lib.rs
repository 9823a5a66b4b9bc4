//! Bitácora Serve - public HTTP API for the blog platform.
//!
//! This crate provides the read-only public surface: published-post
//! listings with pagination, category and free-text filters, single-post
//! fetches with their approved comments, and the category index. Everything
//! is served as JSON over a small set of GET endpoints with an open CORS
//! policy; there is no authentication on this surface.
//!
//! # Architecture
//!
//! - **Config**: Environment-based configuration (bind address, store path)
//! - **AppState**: Shared application state (store handle, configuration)
//! - **Routes**: Endpoint handlers and response schemas grouped by domain
//! - **Error**: Request-level error taxonomy mapped to status codes and
//!   the platform's JSON message bodies

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
