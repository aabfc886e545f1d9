//! Query result models for the ledger.
//!
//! All structs derive `Serialize` so they can be handed to the browser as JSON.

use serde::Serialize;

/// An expenditure category available for spending.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryInfo {
    pub id: i64,
    pub name: String,
    pub budget: f64,
}

/// Whether a category has spent past its budget.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SpendStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Over Spent")]
    OverSpent,
}

impl SpendStatus {
    pub fn for_totals(budget: f64, spent: f64) -> Self {
        if spent > budget {
            SpendStatus::OverSpent
        } else {
            SpendStatus::Ok
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpendStatus::Ok => "OK",
            SpendStatus::OverSpent => "Over Spent",
        }
    }
}

/// Budget versus spending for one category.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetSummary {
    pub id: i64,
    pub name: String,
    pub budget: f64,
    /// Sum of all recorded expenditures, 0 when there are none.
    pub spent: f64,
    /// `budget - spent`; negative once a category is over budget.
    pub remaining: f64,
    pub status: SpendStatus,
}

impl BudgetSummary {
    pub fn new(id: i64, name: String, budget: f64, spent: f64) -> Self {
        Self {
            id,
            name,
            budget,
            spent,
            remaining: budget - spent,
            status: SpendStatus::for_totals(budget, spent),
        }
    }
}

/// A single recorded expenditure.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExpenditureEntry {
    pub id: i64,
    pub category_id: i64,
    pub amount: f64,
    pub description: Option<String>,
    /// Date the entry was recorded (YYYY-MM-DD).
    pub recorded_on: String,
}

/// Result of trying to record an expenditure.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum SpendOutcome {
    /// The amount fit in the remaining budget and was recorded.
    Recorded { name: String, amount: f64 },
    /// Recording the amount would push spending past the budget; nothing was recorded.
    BudgetExceeded { name: String, budget: f64, spent: f64 },
    /// No category with the requested id.
    UnknownCategory { id: i64 },
}

impl SpendOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, SpendOutcome::Recorded { .. })
    }

    /// Message shown to the person entering the expenditure.
    pub fn message(&self) -> String {
        match self {
            SpendOutcome::Recorded { name, amount } => {
                format!("Added {} to {} successfully!", amount, name)
            }
            SpendOutcome::BudgetExceeded {
                name,
                budget,
                spent,
            } => format!(
                "Budget exceeded for {}! Limit: {}, Spent: {}",
                name, budget, spent
            ),
            SpendOutcome::UnknownCategory { id } => format!("No expenditure category with id {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_flips_only_past_budget() {
        assert_eq!(SpendStatus::for_totals(100.0, 99.0), SpendStatus::Ok);
        assert_eq!(SpendStatus::for_totals(100.0, 100.0), SpendStatus::Ok);
        assert_eq!(SpendStatus::for_totals(100.0, 100.5), SpendStatus::OverSpent);
    }

    #[test]
    fn status_serializes_as_display_text() {
        assert_eq!(serde_json::to_string(&SpendStatus::Ok).unwrap(), "\"OK\"");
        assert_eq!(
            serde_json::to_string(&SpendStatus::OverSpent).unwrap(),
            "\"Over Spent\""
        );
        assert_eq!(SpendStatus::OverSpent.as_str(), "Over Spent");
    }

    #[test]
    fn summary_computes_remaining() {
        let summary = BudgetSummary::new(1, "Library".to_string(), 5000.0, 6200.0);
        assert_eq!(summary.remaining, -1200.0);
        assert_eq!(summary.status, SpendStatus::OverSpent);
    }

    #[test]
    fn outcome_messages() {
        let added = SpendOutcome::Recorded {
            name: "Library".to_string(),
            amount: 1500.0,
        };
        assert_eq!(added.message(), "Added 1500 to Library successfully!");
        assert!(added.is_recorded());

        let refused = SpendOutcome::BudgetExceeded {
            name: "Electricity".to_string(),
            budget: 1500000.0,
            spent: 1499000.5,
        };
        assert_eq!(
            refused.message(),
            "Budget exceeded for Electricity! Limit: 1500000, Spent: 1499000.5"
        );
        assert!(!refused.is_recorded());
    }
}
