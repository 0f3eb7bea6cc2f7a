//! HTTP router.
//!
//! | Path | Method | Handler |
//! |---|---|---|
//! | `/account` | GET / POST / PUT / DELETE | list / create / update / delete by body |
//! | `/account/{id}` | GET, any other | fetch / delete by id |
//! | `/delete/{id}` | any | delete by id |
//! | `/transfer` | any | validate and echo |
//! | `/health` | GET | store connectivity |

use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{any, get},
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{accounts, health, transfer},
    middleware::limits,
    storage::AppState,
};

/// Upper bound on the time spent reading a request and writing its response.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub fn create_router(store: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/account",
            get(accounts::list_accounts)
                .post(accounts::create_account)
                .put(accounts::update_account)
                .delete(accounts::delete_account_by_body)
                .fallback(accounts::unsupported_method),
        )
        .route(
            "/account/{id}",
            get(accounts::get_account).fallback(accounts::delete_account),
        )
        .route("/delete/{id}", any(accounts::delete_account))
        .route("/transfer", any(transfer::transfer))
        .layer(axum_middleware::from_fn(limits::limit_header_size))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(axum_middleware::map_response(limits::timeout_error_body))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
