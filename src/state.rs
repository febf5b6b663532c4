use crate::api::FinanceApi;
use crate::config::Config;
use crate::sequence::{KeyedSequencer, Sequencer};
use crate::views::{AdviceRow, BudgetRow, DashboardView, Listing, TransactionRow};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub api: FinanceApi,
    pub transaction_limit: usize,
    pub dashboard: Arc<Sequencer<DashboardView>>,
    pub budgets: Arc<Sequencer<Listing<BudgetRow>>>,
    /// Keyed by the requested limit.
    pub transactions: Arc<KeyedSequencer<usize, Listing<TransactionRow>>>,
    pub advice: Arc<Sequencer<Listing<AdviceRow>>>,
}

impl AppState {
    pub fn new(api: FinanceApi, config: &Config) -> Self {
        Self {
            api,
            transaction_limit: config.transaction_limit,
            dashboard: Arc::new(Sequencer::new("dashboard")),
            budgets: Arc::new(Sequencer::new("budgets")),
            transactions: Arc::new(KeyedSequencer::new("transactions")),
            advice: Arc::new(Sequencer::new("advice")),
        }
    }
}
