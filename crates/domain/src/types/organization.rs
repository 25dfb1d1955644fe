//! Organization-level information

use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;

/// Organization profile with its top-level budget
///
/// The backend may return only `id` and `name`; budget figures then default
/// to zero and the currency is unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub currency_name: Option<String>,
    #[serde(default)]
    pub currency_code: Option<CurrencyCode>,
    #[serde(default)]
    pub budget_name: Option<String>,
    #[serde(default)]
    pub budget_assigned_amount: f64,
    #[serde(default)]
    pub budget_reserved_amount: f64,
    #[serde(default)]
    pub budget_pending_amount: f64,
    #[serde(default)]
    pub budget_spent_amount: f64,
    #[serde(default)]
    pub budget_unassigned_amount: f64,
}

/// Budget figures shown on the dashboard cards
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BudgetAmount {
    pub assigned: f64,
    pub reserved: f64,
    pub pending: f64,
    pub spent: f64,
}

impl OrganizationInfo {
    pub const fn budget_amounts(&self) -> BudgetAmount {
        BudgetAmount {
            assigned: self.budget_assigned_amount,
            reserved: self.budget_reserved_amount,
            pending: self.budget_pending_amount,
            spent: self.budget_spent_amount,
        }
    }

    /// Whether the payload carried budget details
    pub const fn has_budget(&self) -> bool {
        self.budget_name.is_some()
    }
}
