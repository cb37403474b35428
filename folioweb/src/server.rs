//! Web server module for the portfolio service.
//!
//! Serves the portfolio record over two routes: the HTML page at `/` and
//! its JSON mirror at `/api/portfolio`. The record is built exactly once
//! before the listener binds (fail-fast on bad data) and shared read-only
//! with every handler, so both representations always come from the same
//! source of truth.
//!
use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{MethodRouter, get},
};
use foliocore::{adapters, error::FolioError, model::Portfolio};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CONFIG;

/// One row of the routing table: path, method, and the handler service.
pub(crate) struct RouteEntry {
    /// Request path
    pub(crate) path: &'static str,
    /// HTTP method, for logging and auditing
    pub(crate) method: &'static str,
    /// Constructor for the axum service handling this route
    pub(crate) service: fn() -> MethodRouter<Arc<Portfolio>>,
}

/// The complete external HTTP surface, as a statically inspectable table.
///
/// The router is built by folding this table, so a route exists if and
/// only if it is listed here.
pub(crate) const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        method: "GET",
        service: index_route,
    },
    RouteEntry {
        path: "/api/portfolio",
        method: "GET",
        service: api_portfolio_route,
    },
];

fn index_route() -> MethodRouter<Arc<Portfolio>> {
    get(index_page)
}

fn api_portfolio_route() -> MethodRouter<Arc<Portfolio>> {
    get(api_portfolio)
}

/// Adapter failure surfaced as an HTTP response.
///
/// Always a 500: every core error is an unexpected-path failure, and it
/// must reach the caller as an error status rather than an empty success.
struct AppError(FolioError);

impl From<FolioError> for AppError {
    fn from(err: FolioError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("internal error: {}", self.0),
        )
            .into_response()
    }
}

/// Build the application router from the routing table.
pub(crate) fn build_router(portfolio: Arc<Portfolio>) -> Router {
    ROUTES
        .iter()
        .fold(Router::new(), |router, route| {
            router.route(route.path, (route.service)())
        })
        .with_state(portfolio)
}

/// Start the web server.
///
/// Constructs and validates the portfolio record before binding; any
/// `Init` failure aborts startup so a partially-initialized record is
/// never servable.
pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folioweb=info,axum=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let portfolio = Arc::new(Portfolio::canonical()?);
    tracing::info!("portfolio record loaded for {}", portfolio.name);

    let app = build_router(Arc::clone(&portfolio));
    for route in ROUTES {
        tracing::info!("route {} {}", route.method, route.path);
    }

    let addr = CONFIG.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("serving on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Render the portfolio page for browsers
async fn index_page(
    State(portfolio): State<Arc<Portfolio>>,
) -> Result<Html<String>, AppError> {
    Ok(Html(adapters::render_html(&portfolio)?))
}

/// Serve the JSON mirror of the portfolio record
async fn api_portfolio(
    State(portfolio): State<Arc<Portfolio>>,
) -> Result<impl IntoResponse, AppError> {
    let body = adapters::to_json(&portfolio)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
