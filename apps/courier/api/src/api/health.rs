//! Readiness handler that probes both email providers.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

/// Ready only when every provider answers its probe.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = state
        .dispatcher
        .providers()
        .into_iter()
        .map(|provider| {
            let check: HealthCheckFuture<'_> = Box::pin(async move {
                if provider.probe().await {
                    Ok(())
                } else {
                    Err(format!("{} probe failed", provider.name()))
                }
            });
            (provider.name(), check)
        })
        .collect();

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
