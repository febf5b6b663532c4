use crate::format::{clamp_percentage, format_amount, format_currency, format_percentage};
use crate::models::BudgetStatus;
use crate::views::{BudgetHealth, BudgetRow, Listing};

pub const NO_BUDGETS: &str = "No budgets set. Create some to track your spending!";
pub const NO_BUDGETS_YET: &str = "No budgets set yet.";

const WARNING_ABOVE: f64 = 80.0;
const DANGER_ABOVE: f64 = 100.0;

/// Dashboard overview rows, one per category in the order the API listed them.
pub fn project_budget_overview(statuses: &[BudgetStatus]) -> Listing<BudgetRow> {
    project_budgets(statuses, NO_BUDGETS)
}

/// Same rows for the budgets tab, which has its own empty text.
pub fn project_budget_status(statuses: &[BudgetStatus]) -> Listing<BudgetRow> {
    project_budgets(statuses, NO_BUDGETS_YET)
}

fn project_budgets(statuses: &[BudgetStatus], placeholder: &str) -> Listing<BudgetRow> {
    let rows = statuses.iter().map(project_budget).collect();
    Listing::from_items(rows, placeholder)
}

pub fn project_budget(status: &BudgetStatus) -> BudgetRow {
    let percentage_used = status.usage_percentage();
    let remaining = status.remaining();
    let health = classify(percentage_used);

    BudgetRow {
        category: status.category.clone(),
        spent_text: format_currency(status.spent),
        budget_text: format_currency(status.budget),
        remaining,
        remaining_text: remaining_text(remaining),
        over_budget: remaining < 0.0,
        percentage_used,
        usage_text: format!("{} used", format_percentage(percentage_used)),
        progress_fraction: clamp_percentage(percentage_used),
        status: health,
        status_icon: health.icon(),
    }
}

/// Each band's lower bound belongs to the band below it: 80 is ok, 100 is
/// a warning.
pub fn classify(percentage_used: f64) -> BudgetHealth {
    if percentage_used > DANGER_ABOVE {
        BudgetHealth::Danger
    } else if percentage_used > WARNING_ABOVE {
        BudgetHealth::Warning
    } else {
        BudgetHealth::Ok
    }
}

pub fn remaining_text(remaining: f64) -> String {
    if remaining >= 0.0 {
        format!("{} left", format_amount(remaining))
    } else {
        format!("{} over", format_amount(remaining.abs()))
    }
}
