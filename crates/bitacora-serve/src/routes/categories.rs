//! Category endpoints.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use bitacora_store::CategoryRow;

use crate::error::ApiError;
use crate::state::AppState;

/// Response for the category listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryRow>,
}

/// `GET /public/categories`
///
/// Returns every category with its published-post count, ordered
/// alphabetically by name. Rows are returned as stored; only the count is
/// computed.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store.categories_with_counts()?;
    Ok(Json(CategoriesResponse { categories }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::testing::{SEED, app_with_seed, get_json};

    #[tokio::test]
    async fn categories_empty_store_returns_empty_array() {
        let (status, json) = get_json(app_with_seed(""), "/public/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["categories"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn categories_sorted_alphabetically_with_counts() {
        let (status, json) = get_json(app_with_seed(SEED), "/public/categories").await;
        assert_eq!(status, StatusCode::OK);

        let categories = json["categories"].as_array().unwrap();
        let names: Vec<&str> = categories
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Cocina", "Fotografia", "Viajes"]);

        // The draft post in Fotografia does not count.
        for category in categories {
            assert_eq!(category["posts_count"], 1, "{}", category["name"]);
        }
    }

    #[tokio::test]
    async fn categories_expose_slug_and_id() {
        let (_, json) = get_json(app_with_seed(SEED), "/public/categories").await;
        let viajes = json["categories"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["slug"] == "viajes")
            .unwrap();
        assert_eq!(viajes["id"], 1);
        assert_eq!(viajes["name"], "Viajes");
    }
}
