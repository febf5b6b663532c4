use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/view/dashboard", get(handlers::get_dashboard))
        .route("/view/budgets", get(handlers::get_budgets))
        .route("/view/transactions", get(handlers::get_transactions))
        .route("/view/advice", get(handlers::get_advice))
        .route("/view/connection", get(handlers::get_connection))
        .route("/api/transactions", post(handlers::add_transaction))
        .route("/api/budgets", post(handlers::set_budget))
        .with_state(state)
}
