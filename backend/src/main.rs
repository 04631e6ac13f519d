//! Backend entry-point: loads settings, wires the upstream adapter into the
//! aggregation service, and serves HTTP.

mod server;

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_posts::domain::UserPostsService;
use user_posts::inbound::http::health::HealthState;
use user_posts::inbound::http::state::HttpState;
use user_posts::outbound::upstream::UpstreamHttpSource;
use user_posts::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_env().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let base_url = settings
        .upstream_base_url()
        .map_err(std::io::Error::other)?;
    let timeout = settings.upstream_timeout().map_err(std::io::Error::other)?;

    let source = UpstreamHttpSource::new(base_url, timeout).map_err(std::io::Error::other)?;
    info!(
        upstream = %source.base_url(),
        timeout_secs = timeout.map(|t| t.as_secs()),
        %bind_addr,
        "starting user posts backend"
    );
    let service = UserPostsService::new(Arc::new(source));
    let http_state = HttpState::new(Arc::new(service));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr, http_state),
    )?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
