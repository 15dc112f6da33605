//! Response payloads, decoded leniently: the backend variants disagree on
//! which fields are present, so most of them default when missing.

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct Overview {
    #[serde(default)]
    pub total_income: f64,
    #[serde(default)]
    pub total_expenses: f64,
    #[serde(default)]
    pub available_balance: f64,
    #[serde(default)]
    pub expense_distribution: HashMap<String, f64>,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct AdviceResponse {
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub advice: Option<String>,
    #[serde(default)]
    pub predicted_next_month: Option<f64>,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct TaxAdvice {
    #[serde(default)]
    pub total_income: f64,
    #[serde(default)]
    pub standard_deduction: f64,
    #[serde(default)]
    pub taxable_income_estimate: f64,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct InvestmentAdvice {
    #[serde(default)]
    pub savings: f64,
    #[serde(default)]
    pub risk_profile: String,
    #[serde(default)]
    pub suggestions: HashMap<String, serde_json::Value>,
}

/// `graph` is null when the user has no expenses yet; the server sends a
/// `message` instead.
#[derive(Clone, PartialEq, Deserialize)]
pub struct ExpenseGraph {
    #[serde(default)]
    pub graph: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct TrendGraphs {
    #[serde(default)]
    pub income_graph: Option<String>,
    #[serde(default)]
    pub expense_graph: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct CategoryAmount {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: f64,
}

/// `_id` is an integer on the SQL backend and a string on the Mongo one,
/// so it stays a raw value.
#[derive(Clone, PartialEq, Deserialize)]
pub struct RecentTransaction {
    #[serde(rename = "_id", default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct Goal {
    #[serde(rename = "_id", default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub progress: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_decodes_distribution() {
        let overview: Overview = serde_json::from_str(
            r#"{
                "total_income": 5000.0,
                "total_expenses": 1200.5,
                "available_balance": 3799.5,
                "expense_distribution": {"food": 700.5, "travel": 500.0}
            }"#,
        )
        .unwrap();
        assert_eq!(overview.available_balance, 3799.5);
        assert_eq!(overview.expense_distribution["food"], 700.5);
    }

    #[test]
    fn recommendation_tolerates_missing_fields() {
        let rec: Recommendation = serde_json::from_str(r#"{"category": "food"}"#).unwrap();
        assert_eq!(rec.category, "food");
        assert_eq!(rec.advice, None);
        assert_eq!(rec.predicted_next_month, None);
    }

    #[test]
    fn recent_transaction_accepts_numeric_and_string_ids() {
        let sql: RecentTransaction = serde_json::from_str(
            r#"{"_id": 7, "date": "2024-01-01", "category": "food", "amount": 42.5, "type": "expense"}"#,
        )
        .unwrap();
        assert_eq!(sql.id, serde_json::json!(7));
        assert_eq!(sql.kind, "expense");
        assert_eq!(sql.description, None);

        let mongo: RecentTransaction = serde_json::from_str(
            r#"{"_id": "65a1", "date": "2024-01-02", "category": "salary", "amount": 900.0, "type": "income"}"#,
        )
        .unwrap();
        assert_eq!(mongo.id, serde_json::json!("65a1"));
    }

    #[test]
    fn expense_graph_without_data_has_message_only() {
        let graph: ExpenseGraph =
            serde_json::from_str(r#"{"message": "No expenses found!", "graph": null}"#).unwrap();
        assert_eq!(graph.graph, None);
        assert_eq!(graph.message.as_deref(), Some("No expenses found!"));
    }

    #[test]
    fn login_response_token_is_optional() {
        let ok: LoginResponse = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(ok.token.as_deref(), Some("abc"));
        assert_eq!(ok.message, None);

        let registered: RegisterResponse =
            serde_json::from_str(r#"{"message": "User registered successfully!"}"#).unwrap();
        assert_eq!(registered.token, None);
    }
}
