use axum::Router;
use domain_emails::handlers;

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(state.dispatcher.clone())
}
