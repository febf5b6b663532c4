pub mod advice;
pub mod api;
pub mod app;
pub mod budgets;
pub mod config;
pub mod errors;
pub mod format;
pub mod handlers;
pub mod models;
pub mod sequence;
pub mod state;
pub mod summary;
pub mod transactions;
pub mod ui;
pub mod views;

pub use api::FinanceApi;
pub use app::router;
pub use config::Config;
pub use state::AppState;
