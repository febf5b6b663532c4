use crate::format::{format_currency, format_percentage};
use crate::models::IncomeExpenses;
use crate::views::{BalanceState, SummaryView};

pub fn project_summary(totals: &IncomeExpenses) -> SummaryView {
    let IncomeExpenses { income, expenses } = *totals;
    let net_balance = income - expenses;
    let savings_rate = if income > 0.0 {
        net_balance / income * 100.0
    } else {
        0.0
    };
    let balance_state = if net_balance >= 0.0 {
        BalanceState::Positive
    } else {
        BalanceState::Negative
    };

    SummaryView {
        income,
        expenses,
        net_balance,
        savings_rate,
        balance_state,
        income_text: format_currency(income),
        expenses_text: format_currency(expenses),
        net_balance_text: format_currency(net_balance),
        savings_rate_text: format_percentage(savings_rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(income: f64, expenses: f64) -> IncomeExpenses {
        IncomeExpenses { income, expenses }
    }

    #[test]
    fn surplus_month() {
        let view = project_summary(&totals(1000.0, 650.0));
        assert_eq!(view.net_balance, 350.0);
        assert_eq!(view.savings_rate, 35.0);
        assert_eq!(view.balance_state, BalanceState::Positive);
        assert_eq!(view.income_text, "$1000.00");
        assert_eq!(view.expenses_text, "$650.00");
        assert_eq!(view.net_balance_text, "$350.00");
        assert_eq!(view.savings_rate_text, "35.0%");
    }

    #[test]
    fn deficit_month_is_negative() {
        let view = project_summary(&totals(500.0, 800.0));
        assert_eq!(view.net_balance, -300.0);
        assert_eq!(view.savings_rate, -60.0);
        assert_eq!(view.balance_state, BalanceState::Negative);
        assert_eq!(view.net_balance_text, "$-300.00");
    }

    #[test]
    fn zero_income_has_zero_savings_rate() {
        for expenses in [0.0, 1.0, 250.75, 1e9] {
            let view = project_summary(&totals(0.0, expenses));
            assert_eq!(view.savings_rate, 0.0);
            assert_eq!(view.savings_rate_text, "0.0%");
        }
    }

    #[test]
    fn break_even_counts_as_positive() {
        let view = project_summary(&totals(0.0, 0.0));
        assert_eq!(view.net_balance, 0.0);
        assert_eq!(view.balance_state, BalanceState::Positive);
    }
}
