//! Published-post endpoints.
//!
//! The listing and the single-post fetch share their row shaping: category,
//! author, and read-time fall back to the platform's placeholder strings
//! when the store has no value, and timestamps become display dates at this
//! boundary.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use bitacora_store::{CommentRow, PostFilter, PostRow};

use crate::error::ApiError;
use crate::state::AppState;

/// Placeholder shown when a post has no category.
const FALLBACK_CATEGORY: &str = "Sin categoría";

/// Placeholder shown when a post or comment has no resolvable author.
const FALLBACK_AUTHOR: &str = "Anónimo";

/// Read-time estimate shown when the author did not set one.
const FALLBACK_READ_TIME: &str = "5 min read";

// ═══════════════════════════════════════════════════════════════════════════
// Query Parameters
// ═══════════════════════════════════════════════════════════════════════════

/// Query parameters for the published-post listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PostListQuery {
    /// 1-based page number (default: 1).
    pub page: Option<u32>,
    /// Posts per page (default: 10, max: 100).
    pub limit: Option<u32>,
    /// Category slug to filter by.
    pub category: Option<String>,
    /// Free-text search over title, content, and excerpt.
    pub search: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response Types
// ═══════════════════════════════════════════════════════════════════════════

/// A published post as it appears in the listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    /// Category name, or "Sin categoría" when the post has none.
    pub category: String,
    pub category_slug: Option<String>,
    /// Author name, or "Anónimo" when the post has none.
    pub author: String,
    /// Creation date as `YYYY-MM-DD`.
    pub date: String,
    pub featured_image: Option<String>,
    pub comments_count: u32,
    /// Read-time estimate, or "5 min read" when unset.
    pub read_time: String,
}

impl PostSummary {
    fn from_row(row: PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            excerpt: row.excerpt,
            content: row.content,
            category: row
                .category_name
                .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
            category_slug: row.category_slug,
            author: row
                .author_name
                .unwrap_or_else(|| FALLBACK_AUTHOR.to_string()),
            date: row.created_at.format("%Y-%m-%d").to_string(),
            featured_image: row.featured_image,
            comments_count: row.comments_count,
            read_time: row
                .read_time
                .unwrap_or_else(|| FALLBACK_READ_TIME.to_string()),
        }
    }
}

/// A published post as returned by the single-post fetch, with its
/// approved comments embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: i64,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub category: String,
    pub category_slug: Option<String>,
    pub author: String,
    /// Author biography, as stored; absent authors yield null.
    pub author_bio: Option<String>,
    pub date: String,
    pub featured_image: Option<String>,
    pub comments_count: u32,
    pub read_time: String,
    pub comments: Vec<CommentView>,
}

impl PostDetail {
    fn from_row(row: PostRow, comments: Vec<CommentView>) -> Self {
        Self {
            id: row.id,
            title: row.title,
            excerpt: row.excerpt,
            content: row.content,
            category: row
                .category_name
                .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
            category_slug: row.category_slug,
            author: row
                .author_name
                .unwrap_or_else(|| FALLBACK_AUTHOR.to_string()),
            author_bio: row.author_bio,
            date: row.created_at.format("%Y-%m-%d").to_string(),
            featured_image: row.featured_image,
            comments_count: row.comments_count,
            read_time: row
                .read_time
                .unwrap_or_else(|| FALLBACK_READ_TIME.to_string()),
            comments,
        }
    }
}

/// An approved comment as embedded in the single-post response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: i64,
    /// Commenting user's name, falling back to the email they left, then
    /// to "Anónimo".
    pub author_name: String,
    pub author_email: Option<String>,
    pub content: String,
    /// Creation time as `YYYY-MM-DD HH:MM`.
    pub date: String,
}

impl CommentView {
    fn from_row(row: CommentRow) -> Self {
        let author_name = row
            .user_name
            .or_else(|| row.author_email.clone())
            .unwrap_or_else(|| FALLBACK_AUTHOR.to_string());
        Self {
            id: row.id,
            author_name,
            author_email: row.author_email,
            content: row.content,
            date: row.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Pagination envelope for the listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// 1-based page number actually served (after clamping).
    pub page: u32,
    pub limit: u32,
    /// Total posts matching the filters across all pages.
    pub total: u64,
    /// Total page count: `ceil(total / limit)`.
    pub pages: u64,
}

/// Response for the published-post listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostSummary>,
    pub pagination: PaginationMeta,
}

/// Response for the single-post fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub post: PostDetail,
}

// ═══════════════════════════════════════════════════════════════════════════
// Endpoints
// ═══════════════════════════════════════════════════════════════════════════

/// `GET /public/posts`
///
/// Lists published posts, newest first, with pagination metadata.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PostListQuery>,
) -> Result<Json<PostListResponse>, ApiError> {
    let filter =
        PostFilter::from_params(params.page, params.limit, params.category, params.search);
    let page = state.store.list_published(&filter)?;

    let pages = page.total.div_ceil(u64::from(filter.limit));
    let posts = page.posts.into_iter().map(PostSummary::from_row).collect();

    Ok(Json(PostListResponse {
        posts,
        pagination: PaginationMeta {
            page: filter.page,
            limit: filter.limit,
            total: page.total,
            pages,
        },
    }))
}

/// `GET /public/posts/{id}`
///
/// Fetches a single published post with its approved comments, oldest
/// first. Draft posts are indistinguishable from absent ones.
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>, ApiError> {
    let id = parse_post_id(&id)?;

    let row = state
        .store
        .get_published(id)?
        .ok_or(ApiError::PostNotFound)?;
    let comments = state
        .store
        .approved_comments(id)?
        .into_iter()
        .map(CommentView::from_row)
        .collect();

    Ok(Json(PostResponse {
        post: PostDetail::from_row(row, comments),
    }))
}

/// Parse the `{id}` path segment.
///
/// The route only admits digit ids; any other segment falls through to the
/// unmatched-route response. A digit string too large for `i64` is a
/// well-formed id that cannot exist.
fn parse_post_id(raw: &str) -> Result<i64, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::RouteNotFound);
    }
    raw.parse().map_err(|_| ApiError::PostNotFound)
}
