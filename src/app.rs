/*
 * Responsibility
 * - Config 読み込み → 依存生成 → Router 組み立て
 * - Middleware の適用 (認証/認可、CORS、HTTP 基盤)
 * - axum::serve() で起動
 */
use std::net::SocketAddr;
use std::sync::Arc;
use std::{panic, process};

use anyhow::Result;
use axum::{Router, routing::get};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;
use crate::middleware::{
    auth::{access, guard},
    cors, http, security_headers,
};
use crate::services::auth::{
    policy::{AccessPolicy, Requirement},
    principal::{PgPrincipalStore, PrincipalStore},
    token_codec::TokenCodec,
    validator::TokenValidator,
};
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,shop_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing so they don't get "lost"
        // (stderr can be hidden depending on how the process is launched.)
        tracing::error!(?info, "panic");

        // In development, fail fast: crash the whole process so we notice immediately.
        // In production, prefer the default behavior (stderr) and let the server keep running.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    let abort_on_panic = !config.app_env.is_production();
    init_panic_hook(abort_on_panic);

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!().run(&db).await?;

    let state = build_state(db, &config);
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(
        listener,
        // connect-info so the auth stage can record the request origin
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

fn build_state(db: PgPool, config: &Config) -> AppState {
    let tokens = TokenCodec::new(
        &config.jwt_secret,
        config.access_token_ttl_seconds,
        config.access_token_leeway_seconds,
    );
    let validator = TokenValidator::new(tokens.clone());
    let principals: Arc<dyn PrincipalStore> = Arc::new(PgPrincipalStore::new(db.clone()));
    let policy = Arc::new(default_policy());

    AppState::new(db, tokens, validator, principals, policy)
}

/// Ordered route rules; everything not listed requires authentication.
fn default_policy() -> AccessPolicy {
    AccessPolicy::new(Requirement::Authenticated)
        .rule("/health", Requirement::Public)
        .rule("/api/v1/health", Requirement::Public)
        .rule("/api/v1/auth/**", Requirement::Public)
}

fn build_router(state: AppState, config: &Config) -> Router {
    async fn health() -> &'static str {
        "ok"
    }

    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api::v1::routes());

    // The authentication stage must see the request before the guard,
    // so the guard layer is applied first (layers added later run first).
    let router = guard::apply(router, state.clone());
    let router = access::apply(router, state.clone());

    let router = router.with_state(state);
    let router = cors::apply(router, config);
    let router = security_headers::apply(router);
    http::apply(router)
}
