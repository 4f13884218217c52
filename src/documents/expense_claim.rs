use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employee-facing reimbursement request derived from a submitted trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseClaim {
    pub id: Uuid,
    pub employee: String,
    pub company: String,
    pub posting_date: NaiveDate,
    pub business_trip: Uuid,
    pub project: Option<String>,
    pub cost_center: Option<String>,
    #[serde(default)]
    pub expenses: Vec<ExpenseLine>,
}

impl ExpenseClaim {
    pub fn new(
        employee: impl Into<String>,
        company: impl Into<String>,
        posting_date: NaiveDate,
        business_trip: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee: employee.into(),
            company: company.into(),
            posting_date,
            business_trip,
            project: None,
            cost_center: None,
            expenses: Vec::new(),
        }
    }

    pub fn append(&mut self, line: ExpenseLine) {
        self.expenses.push(line);
    }
}

/// One reimbursable line of an expense claim.
///
/// `sanctioned_amount` mirrors `amount` at derivation time; an approver
/// may lower it downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub expense_date: NaiveDate,
    pub expense_type: String,
    pub description: String,
    pub amount: f64,
    pub sanctioned_amount: f64,
    pub project: Option<String>,
    pub cost_center: Option<String>,
}
