//! Portfolio API Server
//!
//! Backend for a personal portfolio page: aggregates the owner's public
//! GitHub activity into a view model and relays contact-form submissions
//! by email. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{GitHubClientImpl, SmtpMailer, ThreadRandom};
use app::{ActivityService, ActivitySettings, ContactRelay};
use config::Config;
use domain::ports::{GitHubClient, Mailer, RandomSource};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub activity_service: Arc<ActivityService<dyn GitHubClient, dyn RandomSource>>,
    pub contact_relay: Arc<ContactRelay<dyn Mailer>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router. `rate_limit` guards the contact route per peer IP and
/// needs the server to provide `ConnectInfo<SocketAddr>`.
pub fn build_router(state: AppState, rate_limit: bool) -> anyhow::Result<Router> {
    let mut contact_routes: Router<AppState> =
        Router::new().route("/api/contact", post(handlers::post_contact));

    if rate_limit {
        // 2 req/sec sustained, burst of 5
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_second(2)
                .burst_size(5)
                .finish()
                .context("Failed to build governor config")?,
        );
        contact_routes = contact_routes.layer(GovernorLayer {
            config: governor_config,
        });
    }

    Ok(Router::new()
        .route("/health", get(health))
        .route("/api/github", get(handlers::get_activity))
        .merge(contact_routes)
        .fallback(handlers::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio API...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let github: Arc<dyn GitHubClient> = Arc::new(
        GitHubClientImpl::new(
            config.github_api_url.clone(),
            config.github_token.clone(),
            config.github_timeout,
        )
        .context("Failed to build GitHub client")?,
    );
    let random: Arc<dyn RandomSource> = Arc::new(ThreadRandom);

    if !config.smtp_configured() {
        tracing::warn!("EMAIL_USER/EMAIL_PASS not set; contact submissions will fail");
    }
    if config.receiver_email.is_empty() {
        tracing::warn!("RECEIVER_EMAIL not set; contact submissions will fail");
    }
    let mailer: Arc<dyn Mailer> = Arc::new(
        SmtpMailer::new(
            &config.smtp_host,
            config.email_user.clone(),
            config.email_pass.clone(),
        )
        .context("Failed to configure SMTP transport")?,
    );

    // Create application services
    let activity_service = Arc::new(ActivityService::new(
        github,
        random,
        ActivitySettings {
            username: config.github_username.clone(),
            designated_language: config.designated_language.clone(),
            overrides: config.overrides,
            fetch_timeout: config.github_timeout,
        },
    ));
    tracing::info!(
        "Aggregating GitHub activity for {} via {}",
        activity_service.username(),
        config.github_api_url
    );

    let contact_relay = Arc::new(ContactRelay::new(mailer, config.receiver_email.clone()));

    let state = AppState {
        activity_service,
        contact_relay,
    };

    let app = build_router(state, config.contact_rate_limit)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
