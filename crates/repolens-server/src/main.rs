mod config;
mod pages;
mod repos;
mod routes;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use repolens_router::{History, Params};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::pages::{PageProps, PageRegistry};

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    pages: Arc<PageRegistry>,
    history: History,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::load_default().unwrap_or_else(|e| {
        warn!("failed to load repolens.toml: {e:#}; using defaults");
        Config::default()
    });

    let history = History::web(config.base_path().as_deref());

    info!(
        routes = routes::TABLE.len(),
        base = history.base(),
        "route table ready"
    );
    for route in routes::TABLE.routes() {
        debug!(route = route.name(), pattern = route.pattern(), "route registered");
    }

    let state = AppState {
        pages: Arc::new(PageRegistry::with_defaults()),
        history,
    };

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/*path", get(page_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("RepoLens running at http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler(State(state): State<AppState>) -> Response {
    dispatch(&state, "/")
}

async fn page_handler(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    dispatch(&state, &format!("/{path}"))
}

/// Funnels every request through the route table.
fn dispatch(state: &AppState, browser_path: &str) -> Response {
    let Some(app_path) = state.history.strip_base(browser_path) else {
        debug!(
            path = browser_path,
            base = state.history.base(),
            "path outside deployment base"
        );
        return render(
            state,
            pages::NOT_FOUND,
            &PageProps::default(),
            StatusCode::NOT_FOUND,
        );
    };

    let matched = routes::TABLE.resolve(&app_path);
    debug!(path = %app_path, route = matched.route().name(), "resolved");

    let props = PageProps::new(decode_params(&matched.props()));
    let status = if matched.is_fallback() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    render(state, matched.route().target(), &props, status)
}

fn render(state: &AppState, target: &str, props: &PageProps, status: StatusCode) -> Response {
    match state.pages.render(target, props) {
        Some(markup) => (status, Html(markup.into_string())).into_response(),
        None => {
            error!(page = target, "route points at an unregistered page");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Internal error</h1>".to_string()),
            )
                .into_response()
        }
    }
}

/// Percent-decodes forwarded parameter values. A value that is not valid
/// UTF-8 once decoded passes through unchanged.
fn decode_params(params: &Params) -> Params {
    params
        .iter()
        .map(|(name, value)| {
            let decoded = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            (name.to_string(), decoded)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_params_percent_decodes_values() {
        let mut params = Params::new();
        params.insert("id", "hello%20world");

        let decoded = decode_params(&params);
        assert_eq!(decoded.get("id"), Some("hello world"));
    }

    #[test]
    fn decode_params_passes_plain_values_through() {
        let mut params = Params::new();
        params.insert("id", "tokio");

        let decoded = decode_params(&params);
        assert_eq!(decoded.get("id"), Some("tokio"));
    }
}
