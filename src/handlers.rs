use crate::advice::project_advice;
use crate::budgets::{project_budget_overview, project_budget_status};
use crate::errors::AppError;
use crate::models::{Acknowledgement, BudgetRequest, NewTransaction};
use crate::state::AppState;
use crate::summary::project_summary;
use crate::transactions::project_transactions;
use crate::ui::render_index;
use crate::views::{AdviceRow, BudgetRow, ConnectionView, DashboardView, Listing, TransactionRow};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::Html,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};

pub const MAX_TRANSACTION_LIMIT: usize = 100;

const CONNECTED: &str = "🔗 Connected to finance API";
const DISCONNECTED: &str = "❌ Finance API disconnected";

#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    pub limit: Option<usize>,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.api.base(), state.transaction_limit))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardView>, AppError> {
    let ticket = state.dashboard.issue();
    let summary = state.api.fetch_summary().await?;
    let view = DashboardView {
        summary: project_summary(&summary.income_expenses),
        budgets: project_budget_overview(&summary.budget_status),
    };

    Ok(Json(state.dashboard.commit(ticket, view).await.into_view()))
}

pub async fn get_budgets(
    State(state): State<AppState>,
) -> Result<Json<Listing<BudgetRow>>, AppError> {
    let ticket = state.budgets.issue();
    let summary = state.api.fetch_summary().await?;
    let view = project_budget_status(&summary.budget_status);

    Ok(Json(state.budgets.commit(ticket, view).await.into_view()))
}

pub async fn get_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<Listing<TransactionRow>>, AppError> {
    let limit = query
        .limit
        .unwrap_or(state.transaction_limit)
        .clamp(1, MAX_TRANSACTION_LIMIT);

    let sequencer = state.transactions.for_key(limit).await;
    let ticket = sequencer.issue();
    let transactions = state.api.fetch_transactions(limit).await?;
    let view = project_transactions(&transactions);

    Ok(Json(sequencer.commit(ticket, view).await.into_view()))
}

pub async fn get_advice(
    State(state): State<AppState>,
) -> Result<Json<Listing<AdviceRow>>, AppError> {
    let ticket = state.advice.issue();
    let items = state.api.fetch_advice().await?;
    let view = project_advice(&items);

    Ok(Json(state.advice.commit(ticket, view).await.into_view()))
}

pub async fn get_connection(State(state): State<AppState>) -> Json<ConnectionView> {
    let connected = match state.api.fetch_summary().await {
        Ok(_) => true,
        Err(err) => {
            warn!("connection check failed: {err}");
            false
        }
    };

    Json(ConnectionView {
        connected,
        label: if connected { CONNECTED } else { DISCONNECTED },
        checked_at: Utc::now().to_rfc3339(),
    })
}

pub async fn add_transaction(
    State(state): State<AppState>,
    payload: Result<Json<NewTransaction>, JsonRejection>,
) -> Result<Json<Acknowledgement>, AppError> {
    let record = validate_transaction(body(payload)?)?;
    let ack = state.api.submit_transaction(&record).await?;
    info!(kind = %record.kind, category = %record.category, "transaction submitted");
    Ok(Json(ack))
}

pub async fn set_budget(
    State(state): State<AppState>,
    payload: Result<Json<BudgetRequest>, JsonRejection>,
) -> Result<Json<Acknowledgement>, AppError> {
    let request = validate_budget(body(payload)?)?;
    let ack = state.api.submit_budget(&request).await?;
    info!(category = %request.category, "budget submitted");
    Ok(Json(ack))
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::bad_request(rejection.body_text()))
}

fn validate_transaction(mut record: NewTransaction) -> Result<NewTransaction, AppError> {
    record.kind = record.kind.trim().to_ascii_lowercase();
    if record.kind != "income" && record.kind != "expense" {
        return Err(AppError::bad_request("type must be 'income' or 'expense'"));
    }
    if !record.amount.is_some_and(|amount| amount > 0.0) {
        return Err(AppError::bad_request("amount must be a positive number"));
    }
    record.category = required_category(&record.category)?;
    record.description = record.description.trim().to_string();
    Ok(record)
}

fn validate_budget(mut request: BudgetRequest) -> Result<BudgetRequest, AppError> {
    if !request.amount.is_some_and(|amount| amount >= 0.0) {
        return Err(AppError::bad_request("amount must be zero or more"));
    }
    request.category = required_category(&request.category)?;
    Ok(request)
}

fn required_category(category: &str) -> Result<String, AppError> {
    let category = category.trim();
    if category.is_empty() {
        return Err(AppError::bad_request("category is required"));
    }
    Ok(category.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn record(kind: &str, amount: f64, category: &str) -> NewTransaction {
        NewTransaction {
            amount: Some(amount),
            category: category.to_string(),
            description: "  Lunch ".to_string(),
            kind: kind.to_string(),
        }
    }

    #[test]
    fn transaction_is_normalized() {
        let record = validate_transaction(record(" Expense", 45.5, " Food ")).unwrap();
        assert_eq!(record.kind, "expense");
        assert_eq!(record.category, "Food");
        assert_eq!(record.description, "Lunch");
    }

    #[test]
    fn transaction_rejects_bad_input() {
        for bad in [
            record("transfer", 10.0, "Food"),
            record("income", 0.0, "Salary"),
            record("income", -5.0, "Salary"),
            record("expense", f64::NAN, "Food"),
            record("expense", 10.0, "   "),
            NewTransaction {
                amount: None,
                ..record("expense", 1.0, "Food")
            },
        ] {
            let err = validate_transaction(bad).unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn budget_allows_zero_but_not_negative() {
        let ok = validate_budget(BudgetRequest {
            category: "Food".into(),
            amount: Some(0.0),
        });
        assert!(ok.is_ok());

        for amount in [Some(-1.0), None] {
            let err = validate_budget(BudgetRequest {
                category: "Food".into(),
                amount,
            })
            .unwrap_err();
            assert_eq!(err.message, "amount must be zero or more");
        }

        let err = validate_budget(BudgetRequest {
            category: "".into(),
            amount: Some(20.0),
        })
        .unwrap_err();
        assert_eq!(err.message, "category is required");
    }
}
