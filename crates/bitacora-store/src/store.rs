//! Query construction and execution against the content store.
//!
//! Only published posts and approved comments are ever visible through this
//! layer; the status filters live in the SQL itself so no caller can forget
//! them.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::{Connection, OpenFlags, OptionalExtension, params, params_from_iter};

use crate::error::Result;
use crate::model::{CategoryRow, CommentRow, PostFilter, PostRow};

/// One page of published posts plus the total match count across all pages.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<PostRow>,
    pub total: u64,
}

/// Read-only handle to the blog content store.
///
/// The connection is shared behind a mutex; each operation holds the lock
/// only for the duration of its own statements.
#[derive(Clone)]
pub struct BlogStore {
    conn: Arc<Mutex<Connection>>,
}

impl BlogStore {
    /// Open the store read-only.
    ///
    /// The database is owned and written by the publishing side, so the
    /// public API never needs write access.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self::from_connection(conn))
    }

    /// Wrap an existing connection.
    ///
    /// Used by tests with in-memory databases.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Fetch one page of published posts matching `filter`, newest first,
    /// together with the total number of matches across all pages.
    pub fn list_published(&self, filter: &PostFilter) -> Result<PostPage> {
        let (where_sql, binds) = filter_clauses(filter);
        let conn = self.conn.lock();

        // limit and offset are clamped integers, formatted into the
        // statement; everything user-supplied goes through binds.
        let query = format!(
            "SELECT
                p.id,
                p.title,
                p.excerpt,
                p.content,
                c.name,
                c.slug,
                u.name,
                u.bio,
                p.featured_image,
                p.read_time,
                COUNT(co.id),
                p.created_at
            FROM posts p
            LEFT JOIN categories c ON p.category_id = c.id
            LEFT JOIN users u ON p.author_id = u.id
            LEFT JOIN comments co ON co.post_id = p.id AND co.status = 'approved'
            {where_sql}
            GROUP BY p.id
            ORDER BY p.created_at DESC
            LIMIT {limit} OFFSET {offset}",
            limit = filter.limit,
            offset = filter.offset(),
        );

        let mut stmt = conn.prepare(&query)?;
        let posts = stmt
            .query_map(params_from_iter(binds.iter()), post_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        // The total reuses the same filters without the page window. The
        // comments join is not needed for counting rows.
        let count_query = format!(
            "SELECT COUNT(*)
             FROM posts p
             LEFT JOIN categories c ON p.category_id = c.id
             {where_sql}"
        );
        let total: u64 =
            conn.query_row(&count_query, params_from_iter(binds.iter()), |row| {
                row.get(0)
            })?;

        Ok(PostPage { posts, total })
    }

    /// Fetch a single published post by id.
    ///
    /// Returns `None` when the id does not exist or the post is not
    /// published; callers cannot tell the two apart.
    pub fn get_published(&self, id: i64) -> Result<Option<PostRow>> {
        let conn = self.conn.lock();
        let post = conn
            .query_row(
                "SELECT
                    p.id,
                    p.title,
                    p.excerpt,
                    p.content,
                    c.name,
                    c.slug,
                    u.name,
                    u.bio,
                    p.featured_image,
                    p.read_time,
                    COUNT(co.id),
                    p.created_at
                FROM posts p
                LEFT JOIN categories c ON p.category_id = c.id
                LEFT JOIN users u ON p.author_id = u.id
                LEFT JOIN comments co ON co.post_id = p.id AND co.status = 'approved'
                WHERE p.status = 'published' AND p.id = ?
                GROUP BY p.id",
                params![id],
                post_from_row,
            )
            .optional()?;
        Ok(post)
    }

    /// Fetch the approved comments for a post, oldest first.
    pub fn approved_comments(&self, post_id: i64) -> Result<Vec<CommentRow>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT co.id, u.name, co.author_email, co.content, co.created_at
             FROM comments co
             LEFT JOIN users u ON co.user_id = u.id
             WHERE co.post_id = ? AND co.status = 'approved'
             ORDER BY co.created_at ASC",
        )?;
        let comments = stmt
            .query_map(params![post_id], |row| {
                Ok(CommentRow {
                    id: row.get(0)?,
                    user_name: row.get(1)?,
                    author_email: row.get(2)?,
                    content: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(comments)
    }

    /// Fetch every category with its published-post count, ordered
    /// alphabetically by name.
    ///
    /// Categories without published posts are included with a count of zero.
    pub fn categories_with_counts(&self) -> Result<Vec<CategoryRow>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT c.id, c.name, c.slug, COUNT(p.id)
             FROM categories c
             LEFT JOIN posts p ON p.category_id = c.id AND p.status = 'published'
             GROUP BY c.id
             ORDER BY c.name",
        )?;
        let categories = stmt
            .query_map([], |row| {
                Ok(CategoryRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    slug: row.get(2)?,
                    posts_count: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(categories)
    }
}

/// Assemble the WHERE clause and bind values shared by the listing and its
/// count query. The search term matches title, content, or excerpt.
fn filter_clauses(filter: &PostFilter) -> (String, Vec<String>) {
    let mut clauses = vec!["p.status = 'published'".to_string()];
    let mut binds = Vec::new();

    if let Some(slug) = &filter.category {
        clauses.push("c.slug = ?".to_string());
        binds.push(slug.clone());
    }
    if let Some(term) = &filter.search {
        clauses.push("(p.title LIKE ? OR p.content LIKE ? OR p.excerpt LIKE ?)".to_string());
        let pattern = format!("%{term}%");
        binds.push(pattern.clone());
        binds.push(pattern.clone());
        binds.push(pattern);
    }

    (format!("WHERE {}", clauses.join(" AND ")), binds)
}

/// Map one joined post row in the column order both post queries share.
fn post_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PostRow> {
    Ok(PostRow {
        id: row.get(0)?,
        title: row.get(1)?,
        excerpt: row.get(2)?,
        content: row.get(3)?,
        category_name: row.get(4)?,
        category_slug: row.get(5)?,
        author_name: row.get(6)?,
        author_bio: row.get(7)?,
        featured_image: row.get(8)?,
        read_time: row.get(9)?,
        comments_count: row.get(10)?,
        created_at: row.get(11)?,
    })
}
