//! HTTP server: listing page, post page, and the load-more proxy

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::cms::{CmsClient, CmsError};
use crate::config::SiteConfig;
use crate::content::{PostView, SummaryView};
use crate::templates::TemplateRenderer;

const STYLESHEET: &str = include_str!("../templates/theme/styles.css");

/// Shared handler state
pub struct ServerState {
    pub config: SiteConfig,
    pub cms: CmsClient,
    pub renderer: TemplateRenderer,
}

/// Errors surfaced from handlers as HTTP responses
pub enum AppError {
    Cms(CmsError),
    BadCursor,
    Render(anyhow::Error),
}

impl From<CmsError> for AppError {
    fn from(err: CmsError) -> Self {
        AppError::Cms(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Cms(err) => {
                tracing::error!("content API failure: {}", err);
                (StatusCode::BAD_GATEWAY, "content API unavailable").into_response()
            }
            AppError::BadCursor => {
                (StatusCode::BAD_REQUEST, "invalid page cursor").into_response()
            }
            AppError::Render(err) => {
                tracing::error!("render failure: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "render error").into_response()
            }
        }
    }
}

/// Start the blog server
pub async fn start(state: Arc<ServerState>, ip: &str, port: u16) -> Result<()> {
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/post/:uid", get(post_handler))
        .route("/api/posts", get(more_posts_handler))
        .route("/styles.css", get(styles_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Listing page: first page of summaries plus the next-page cursor
async fn index_handler(
    State(state): State<Arc<ServerState>>,
) -> Result<Html<String>, AppError> {
    let page = state.cms.query_posts(state.config.api.page_size).await?;
    let posts: Vec<SummaryView> = page.results.iter().map(SummaryView::from).collect();

    let html = state
        .renderer
        .render_index(&state.config, &posts, page.next_page.as_deref())
        .map_err(AppError::Render)?;
    Ok(Html(html))
}

/// Post page
///
/// A uid the API does not know yet renders the fallback shell with the
/// loading indicator rather than a hard 404.
async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Path(uid): Path<String>,
) -> Result<Html<String>, AppError> {
    let detail = state.cms.get_by_uid(&uid).await?;
    let view = detail.as_ref().map(PostView::from);

    let html = state
        .renderer
        .render_post(&state.config, view.as_ref())
        .map_err(AppError::Render)?;
    Ok(Html(html))
}

#[derive(Deserialize)]
struct MorePostsParams {
    page: String,
}

#[derive(Serialize)]
struct MorePostsResponse {
    next_page: Option<String>,
    results: Vec<SummaryView>,
}

/// Load-more proxy: follows a `next_page` cursor through the CMS client
///
/// Keeping this server-side keeps the access token out of the markup.
async fn more_posts_handler(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<MorePostsParams>,
) -> Result<Json<MorePostsResponse>, AppError> {
    if !cursor_is_valid(&state.config.api.url, &params.page) {
        return Err(AppError::BadCursor);
    }

    let page = state.cms.fetch_page(&params.page).await?;
    Ok(Json(MorePostsResponse {
        next_page: page.next_page,
        results: page.results.iter().map(SummaryView::from).collect(),
    }))
}

async fn styles_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLESHEET,
    )
}

/// Cursors must point back at the configured API
fn cursor_is_valid(api_url: &str, cursor: &str) -> bool {
    cursor.starts_with(api_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_must_target_configured_api() {
        let api = "https://cms.example.com/api/v2/";
        assert!(cursor_is_valid(
            api,
            "https://cms.example.com/api/v2/documents/search?page=2"
        ));
        assert!(!cursor_is_valid(api, "https://evil.example.com/steal"));
        assert!(!cursor_is_valid(api, ""));
    }

    #[test]
    fn test_cms_failure_maps_to_bad_gateway() {
        let err = AppError::Cms(CmsError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "https://cms.example.com/documents/search".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_bad_cursor_maps_to_bad_request() {
        let response = AppError::BadCursor.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_render_failure_maps_to_internal_error() {
        let response = AppError::Render(anyhow::anyhow!("template missing")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
