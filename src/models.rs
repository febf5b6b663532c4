use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl From<String> for TransactionKind {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("income") {
            Self::Income
        } else {
            Self::Expense
        }
    }
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    #[serde(default, deserialize_with = "lenient_number")]
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: TransactionKind,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetStatus {
    /// Filled from the key of the enclosing `budget_status` object.
    #[serde(skip)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub budget: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub spent: f64,
    #[serde(default, deserialize_with = "lenient_optional_number")]
    pub percentage_used: Option<f64>,
}

impl BudgetStatus {
    pub fn remaining(&self) -> f64 {
        self.budget - self.spent
    }

    /// Reported usage, or `spent / budget * 100` when the API left it out.
    /// A zero budget yields 0.
    pub fn usage_percentage(&self) -> f64 {
        match self.percentage_used {
            Some(value) => value,
            None if self.budget > 0.0 => self.spent / self.budget * 100.0,
            None => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct IncomeExpenses {
    #[serde(default, deserialize_with = "lenient_number")]
    pub income: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub expenses: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Summary {
    #[serde(default, deserialize_with = "nullable")]
    pub income_expenses: IncomeExpenses,
    #[serde(default, deserialize_with = "ordered_budgets")]
    pub budget_status: Vec<BudgetStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdviceItem {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// `amount` is `None` when the body carried `null` or something that is not
/// a finite number; validation rejects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(default, deserialize_with = "lenient_optional_number")]
    pub amount: Option<f64>,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRequest {
    pub category: String,
    #[serde(default, deserialize_with = "lenient_optional_number")]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

fn default_success() -> bool {
    true
}

/// Numbers and numeric strings; `"NaN"` and `"inf"` parse as `f64` but are
/// not amounts.
fn number_from(value: Option<Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|value| value.is_finite())
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(number_from(value).unwrap_or(0.0))
}

fn lenient_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(number_from(value))
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

struct OrderedEntries<V, T, F> {
    expecting: &'static str,
    build: F,
    entry: PhantomData<fn(V) -> T>,
}

impl<V, T, F> OrderedEntries<V, T, F>
where
    F: Fn(String, V) -> T,
{
    fn new(expecting: &'static str, build: F) -> Self {
        Self {
            expecting,
            build,
            entry: PhantomData,
        }
    }
}

impl<'de, F, V, T> Visitor<'de> for OrderedEntries<V, T, F>
where
    F: Fn(String, V) -> T,
    V: Deserialize<'de>,
{
    type Value = Vec<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, V>()? {
            entries.push((self.build)(key, value));
        }
        Ok(entries)
    }
}

/// Keeps categories in the order the API listed them.
fn ordered_budgets<'de, D>(deserializer: D) -> Result<Vec<BudgetStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(OrderedEntries::new(
        "an object of category budget statuses",
        |category, mut status: BudgetStatus| {
            status.category = category;
            status
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_keeps_budget_order_and_fills_category() {
        let summary: Summary = serde_json::from_str(
            r#"{
                "income_expenses": { "income": 1000, "expenses": 650.5 },
                "budget_status": {
                    "Transportation": { "budget": 100, "spent": 120, "remaining": -20, "percentage_used": 120 },
                    "Food": { "budget": 200, "spent": 180, "remaining": 20, "percentage_used": 90 },
                    "Entertainment": { "budget": 50, "spent": 0, "remaining": 50, "percentage_used": 0 }
                },
                "spending_by_category": { "Transportation": 120, "Food": 180 }
            }"#,
        )
        .unwrap();

        let categories: Vec<_> = summary
            .budget_status
            .iter()
            .map(|status| status.category.as_str())
            .collect();
        assert_eq!(categories, ["Transportation", "Food", "Entertainment"]);
        assert_eq!(summary.income_expenses.expenses, 650.5);
    }

    #[test]
    fn summary_defaults_missing_sections() {
        let summary: Summary = serde_json::from_value(json!({})).unwrap();
        assert!(summary.budget_status.is_empty());
        assert_eq!(summary.income_expenses.income, 0.0);

        let summary: Summary =
            serde_json::from_value(json!({ "income_expenses": null, "budget_status": null }))
                .unwrap();
        assert!(summary.budget_status.is_empty());
        assert_eq!(summary.income_expenses.expenses, 0.0);
    }

    #[test]
    fn summary_rejects_non_object_budget_status() {
        let result = serde_json::from_value::<Summary>(json!({ "budget_status": [1, 2] }));
        assert!(result.is_err());
    }

    #[test]
    fn numbers_are_decoded_leniently() {
        let status: BudgetStatus =
            serde_json::from_value(json!({ "budget": "250.5", "spent": null })).unwrap();
        assert_eq!(status.budget, 250.5);
        assert_eq!(status.spent, 0.0);
        assert_eq!(status.percentage_used, None);

        let txn: Transaction = serde_json::from_value(json!({
            "amount": "abc", "category": "Food", "description": "", "type": "expense"
        }))
        .unwrap();
        assert_eq!(txn.amount, 0.0);
    }

    #[test]
    fn non_finite_text_decodes_to_zero() {
        let totals: IncomeExpenses = serde_json::from_value(json!({
            "income": "NaN", "expenses": "inf"
        }))
        .unwrap();
        assert_eq!(totals.income, 0.0);
        assert_eq!(totals.expenses, 0.0);

        let status: BudgetStatus = serde_json::from_value(json!({
            "budget": "-infinity", "spent": 5, "percentage_used": "nan"
        }))
        .unwrap();
        assert_eq!(status.budget, 0.0);
        assert_eq!(status.percentage_used, None);
    }

    #[test]
    fn submitted_amounts_are_optional_and_lenient() {
        let record: NewTransaction = serde_json::from_value(json!({
            "amount": "45", "category": "Food", "type": "expense"
        }))
        .unwrap();
        assert_eq!(record.amount, Some(45.0));
        assert_eq!(record.description, "");

        let request: BudgetRequest =
            serde_json::from_value(json!({ "category": "Food", "amount": null })).unwrap();
        assert_eq!(request.amount, None);

        let request: BudgetRequest = serde_json::from_value(json!({ "category": "Food" })).unwrap();
        assert_eq!(request.amount, None);
    }

    #[test]
    fn usage_percentage_guards_zero_budget() {
        let status = BudgetStatus {
            category: "Gifts".into(),
            budget: 0.0,
            spent: 40.0,
            percentage_used: None,
        };
        assert_eq!(status.usage_percentage(), 0.0);
        assert_eq!(status.remaining(), -40.0);

        let status = BudgetStatus {
            budget: 200.0,
            spent: 50.0,
            ..status
        };
        assert_eq!(status.usage_percentage(), 25.0);
    }

    #[test]
    fn transaction_kind_defaults_to_expense() {
        assert_eq!(TransactionKind::from("income".to_string()), TransactionKind::Income);
        assert_eq!(TransactionKind::from(" Income ".to_string()), TransactionKind::Income);
        assert_eq!(TransactionKind::from("refund".to_string()), TransactionKind::Expense);
    }

    #[test]
    fn acknowledgement_defaults_success() {
        let ack: Acknowledgement =
            serde_json::from_value(json!({ "message": "Budget set: $200 for Food" })).unwrap();
        assert!(ack.success);
        assert_eq!(ack.message, "Budget set: $200 for Food");
    }
}
