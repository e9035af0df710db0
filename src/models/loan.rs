//! Loan (borrow) model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Outstanding loan, owned by the borrowing patron
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub item_id: i32,
    pub issued_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
}

/// Loan joined with item details for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanDetails {
    pub item_id: i32,
    pub title: String,
    /// Serialized as an ISO date, `YYYY-MM-DD`
    pub due_date: NaiveDate,
    pub is_overdue: bool,
}

impl LoanDetails {
    pub fn due_date_iso(&self) -> String {
        self.due_date.format("%Y-%m-%d").to_string()
    }
}
