//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR page at `/`, the compiled WASM/CSS
//! bundle and public assets (`/pkg/*`, `/profile.jpg`) from the site root,
//! and a liveness probe. There is no API surface.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use portfolio_client::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Site-root files supplied at deploy time rather than built from the repo.
/// The page still renders without them (the photo falls back to a generated
/// avatar), so their absence is only logged.
const DEPLOY_ASSETS: &[&str] = &["profile.jpg"];

/// Full application router: health probe + Leptos SSR + static assets.
pub fn app(config: &ServerConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root = assets_root(config, &leptos_options);
    tracing::debug!(site_root = %site_root.display(), "serving static assets");
    for asset in missing_deploy_assets(&site_root) {
        tracing::warn!(asset, site_root = %site_root.display(), "deploy-time asset missing, client will use its fallback");
    }

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options);

    let router = Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .fallback_service(ServeDir::new(site_root))
        .layer(TraceLayer::new_for_http());

    if config.compression {
        router.layer(CompressionLayer::new())
    } else {
        router
    }
}

/// Directory holding `/pkg` and public assets.
fn assets_root(config: &ServerConfig, leptos_options: &LeptosOptions) -> PathBuf {
    config
        .assets_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()))
}

/// Entries of `DEPLOY_ASSETS` not present under `root`.
fn missing_deploy_assets(root: &Path) -> Vec<&'static str> {
    DEPLOY_ASSETS.iter().copied().filter(|name| !root.join(name).is_file()).collect()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
