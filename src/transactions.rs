use crate::format::{direction_glyph, format_currency};
use crate::models::{Transaction, TransactionKind};
use crate::views::{Listing, TransactionRow};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const NO_TRANSACTIONS: &str = "No transactions yet. Add some to get started!";

const DATE_DISPLAY: &str = "%b %-d, %Y";

pub fn project_transactions(transactions: &[Transaction]) -> Listing<TransactionRow> {
    let rows = transactions.iter().map(project_transaction).collect();
    Listing::from_items(rows, NO_TRANSACTIONS)
}

pub fn project_transaction(transaction: &Transaction) -> TransactionRow {
    let sign = match transaction.kind {
        TransactionKind::Income => '+',
        TransactionKind::Expense => '-',
    };

    TransactionRow {
        kind: transaction.kind.as_str(),
        glyph: direction_glyph(transaction.kind),
        signed_amount_text: format!("{sign}{}", format_currency(transaction.amount)),
        category: transaction.category.clone(),
        description: transaction.description.clone(),
        date_text: date_text(&transaction.date),
    }
}

/// Renders the API timestamp as a short calendar date. Anything that does
/// not parse is shown as received.
pub fn date_text(raw: &str) -> String {
    parse_date(raw.trim())
        .map(|date| date.format(DATE_DISPLAY).to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    for layout in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, layout) {
            return Some(stamp.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(amount: f64, kind: TransactionKind, category: &str, description: &str) -> Transaction {
        Transaction {
            amount,
            category: category.to_string(),
            description: description.to_string(),
            kind,
            date: "2024-03-05 12:30:00".to_string(),
        }
    }

    #[test]
    fn expense_row_is_negative() {
        let row = project_transaction(&txn(45.5, TransactionKind::Expense, "Food", "Lunch"));
        assert_eq!(row.signed_amount_text, "-$45.50");
        assert_eq!(row.kind, "expense");
        assert_eq!(row.glyph, "💸");
        assert_eq!(row.category, "Food");
        assert_eq!(row.description, "Lunch");
    }

    #[test]
    fn income_row_is_positive() {
        let row = project_transaction(&txn(2500.0, TransactionKind::Income, "Salary", "March pay"));
        assert_eq!(row.signed_amount_text, "+$2500.00");
        assert_eq!(row.kind, "income");
        assert_eq!(row.glyph, "💰");
    }

    #[test]
    fn dates_render_short_or_pass_through() {
        assert_eq!(date_text("2024-03-05 12:30:00"), "Mar 5, 2024");
        assert_eq!(date_text("2024-03-05T12:30:00.123456"), "Mar 5, 2024");
        assert_eq!(date_text("2024-12-31T23:59:59Z"), "Dec 31, 2024");
        assert_eq!(date_text("2024-01-09"), "Jan 9, 2024");
        assert_eq!(date_text("yesterday"), "yesterday");
        assert_eq!(date_text(""), "");
    }

    #[test]
    fn order_is_kept() {
        let listing = project_transactions(&[
            txn(10.0, TransactionKind::Expense, "Food", "Coffee"),
            txn(99.0, TransactionKind::Income, "Gift", "Birthday"),
        ]);
        let amounts: Vec<_> = listing
            .items()
            .iter()
            .map(|row| row.signed_amount_text.as_str())
            .collect();
        assert_eq!(amounts, ["-$10.00", "+$99.00"]);
    }

    #[test]
    fn no_transactions_is_placeholder() {
        let listing = project_transactions(&[]);
        assert_eq!(
            listing,
            Listing::Empty {
                placeholder: NO_TRANSACTIONS.to_string()
            }
        );
    }
}
