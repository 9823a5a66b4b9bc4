//! API route definitions.

mod categories;
mod health;
mod posts;

use axum::Router;
use axum::extract::Request;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the complete API router.
///
/// # Route Structure
///
/// - `GET /health` - Health check
/// - `GET /public/posts` - Published-post listing (`page`, `limit`,
///   `category`, `search`)
/// - `GET /public/posts/{id}` - Single published post with its approved
///   comments
/// - `GET /public/categories` - Categories with published-post counts
///
/// The `{id}` capture is matched before the plain listing path. Unmatched
/// paths produce the 404 body, non-GET methods on known paths the 405 body,
/// and any OPTIONS request short-circuits with an empty 200 before routing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/public/posts", get(posts::list_posts))
        .route("/public/posts/{id}", get(posts::get_post))
        .route("/public/categories", get(categories::list_categories))
        .fallback(endpoint_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(preflight))
        .layer(middleware::map_response(set_json_charset))
        .with_state(state)
}

/// Fallback for paths that match no route.
async fn endpoint_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Fallback for matched paths hit with a method other than GET.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Short-circuit CORS preflight: any OPTIONS request gets an empty 200,
/// regardless of path.
async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    }
}

/// Stamp the UTF-8 charset on JSON responses.
async fn set_json_charset(mut response: Response) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|ct| ct.as_bytes().starts_with(b"application/json"));
    if is_json {
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=UTF-8"),
        );
    }
    response
}
