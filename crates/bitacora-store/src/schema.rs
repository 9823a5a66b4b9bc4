//! SQLite schema for the blog content store.
//!
//! The store is written by the publishing side of the platform; the public
//! API only reads it. This module bootstraps an empty database for tests
//! and local development.

use rusqlite::{Connection, Result};

/// Create the content tables and indexes if they don't exist.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            bio TEXT,
            avatar TEXT
        );

        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            excerpt TEXT,
            content TEXT NOT NULL,
            category_id INTEGER REFERENCES categories(id),
            author_id INTEGER REFERENCES users(id),
            status TEXT NOT NULL DEFAULT 'draft',
            featured_image TEXT,
            read_time TEXT,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS comments (
            id INTEGER PRIMARY KEY,
            post_id INTEGER NOT NULL REFERENCES posts(id),
            user_id INTEGER REFERENCES users(id),
            author_email TEXT,
            content TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_posts_status_created
            ON posts(status, created_at DESC);
        CREATE INDEX IF NOT EXISTS idx_posts_category
            ON posts(category_id);
        CREATE INDEX IF NOT EXISTS idx_comments_post_status
            ON comments(post_id, status);
        "#,
    )
}
