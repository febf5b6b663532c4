//! Display-ready records handed to the page script. Everything here is
//! already formatted and classified; the script only binds it.

use serde::Serialize;

/// A list region that is either empty (with the text to show instead) or
/// populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Listing<T> {
    Empty { placeholder: String },
    Items { items: Vec<T> },
}

impl<T> Listing<T> {
    pub fn from_items(items: Vec<T>, placeholder: &str) -> Self {
        if items.is_empty() {
            Self::Empty {
                placeholder: placeholder.to_string(),
            }
        } else {
            Self::Items { items }
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Self::Empty { .. } => &[],
            Self::Items { items } => items,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceState {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub income: f64,
    pub expenses: f64,
    pub net_balance: f64,
    pub savings_rate: f64,
    pub balance_state: BalanceState,
    pub income_text: String,
    pub expenses_text: String,
    pub net_balance_text: String,
    pub savings_rate_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetHealth {
    Ok,
    Warning,
    Danger,
}

impl BudgetHealth {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Ok => "✅",
            Self::Warning => "⚠️",
            Self::Danger => "🚨",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRow {
    pub category: String,
    pub spent_text: String,
    pub budget_text: String,
    pub remaining: f64,
    pub remaining_text: String,
    pub over_budget: bool,
    /// Unclamped; may exceed 100.
    pub percentage_used: f64,
    pub usage_text: String,
    /// Progress-bar width in `[0, 100]`.
    pub progress_fraction: f64,
    pub status: BudgetHealth,
    pub status_icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceTone {
    Alert,
    Positive,
    Warning,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdviceRow {
    #[serde(rename = "type")]
    pub kind: String,
    pub tone: AdviceTone,
    pub icon: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    /// `income` or `expense`; doubles as the amount's CSS class.
    pub kind: &'static str,
    pub glyph: &'static str,
    pub signed_amount_text: String,
    pub category: String,
    pub description: String,
    pub date_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub summary: SummaryView,
    pub budgets: Listing<BudgetRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionView {
    pub connected: bool,
    pub label: &'static str,
    pub checked_at: String,
}
