//! Row and filter types for the content store.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Default number of posts per listing page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound on posts per listing page.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Filters for the published-post listing.
#[derive(Debug, Clone)]
pub struct PostFilter {
    /// 1-based page number.
    pub page: u32,
    /// Posts per page.
    pub limit: u32,
    /// Exact category slug match.
    pub category: Option<String>,
    /// Substring match against title, content, or excerpt.
    pub search: Option<String>,
}

impl PostFilter {
    /// Build a filter from raw query parameters.
    ///
    /// `page` is floored to 1, `limit` is clamped to `1..=MAX_PAGE_SIZE`.
    /// Empty strings mean the filter is absent.
    pub fn from_params(
        page: Option<u32>,
        limit: Option<u32>,
        category: Option<String>,
        search: Option<String>,
    ) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
            category: category.filter(|s| !s.is_empty()),
            search: search.filter(|s| !s.is_empty()),
        }
    }

    /// Row offset implied by page and limit.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// A post row joined with its category, author, and approved-comment count.
#[derive(Debug, Clone)]
pub struct PostRow {
    pub id: i64,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    /// Category name, if the post has a resolvable category.
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
    /// Author name, if the post has a resolvable author.
    pub author_name: Option<String>,
    pub author_bio: Option<String>,
    pub featured_image: Option<String>,
    pub read_time: Option<String>,
    /// Number of approved comments on the post.
    pub comments_count: u32,
    pub created_at: NaiveDateTime,
}

/// An approved comment row joined with its commenting user.
#[derive(Debug, Clone)]
pub struct CommentRow {
    pub id: i64,
    /// Registered user's name, if the comment has a user reference.
    pub user_name: Option<String>,
    /// Free-text email left by guest commenters.
    pub author_email: Option<String>,
    pub content: String,
    pub created_at: NaiveDateTime,
}

/// A category row with its published-post count.
///
/// Returned to clients as stored, so it carries the serde derives directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub slug: String,
    /// Number of published posts referencing this category.
    pub posts_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults() {
        let filter = PostFilter::from_params(None, None, None, None);
        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(filter.category, None);
        assert_eq!(filter.search, None);
        assert_eq!(filter.offset(), 0);
    }

    #[test]
    fn filter_page_zero_floored_to_one() {
        let filter = PostFilter::from_params(Some(0), None, None, None);
        assert_eq!(filter.page, 1);
        assert_eq!(filter.offset(), 0);
    }

    #[test]
    fn filter_limit_zero_floored_to_one() {
        let filter = PostFilter::from_params(None, Some(0), None, None);
        assert_eq!(filter.limit, 1);
    }

    #[test]
    fn filter_limit_clamped_to_max() {
        let filter = PostFilter::from_params(None, Some(5000), None, None);
        assert_eq!(filter.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn filter_offset_from_page_and_limit() {
        let filter = PostFilter::from_params(Some(3), Some(20), None, None);
        assert_eq!(filter.offset(), 40);
    }

    #[test]
    fn filter_empty_strings_mean_absent() {
        let filter = PostFilter::from_params(
            None,
            None,
            Some(String::new()),
            Some(String::new()),
        );
        assert_eq!(filter.category, None);
        assert_eq!(filter.search, None);
    }

    #[test]
    fn filter_keeps_non_empty_terms() {
        let filter = PostFilter::from_params(
            None,
            None,
            Some("viajes".to_string()),
            Some("oaxaca".to_string()),
        );
        assert_eq!(filter.category.as_deref(), Some("viajes"));
        assert_eq!(filter.search.as_deref(), Some("oaxaca"));
    }
}
