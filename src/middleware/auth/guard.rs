//! ルート単位の認可ガード（AccessPolicy の評価）
//!
//! Runs after the authentication stage. Public paths pass through untouched;
//! protected paths require an installed AuthCtx and otherwise end at the
//! authentication entry point (fixed 401).

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::services::auth::{entry_point, policy::Requirement};
use crate::state::AppState;

pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, require_authentication))
}

async fn require_authentication(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    match state.policy.requirement_for(req.uri().path()) {
        Requirement::Public => next.run(req).await,
        Requirement::Authenticated => {
            if req.extensions().get::<AuthCtx>().is_some() {
                next.run(req).await
            } else {
                tracing::debug!(path = %req.uri().path(), "unauthenticated request to protected path");
                entry_point::unauthenticated_response()
            }
        }
    }
}
