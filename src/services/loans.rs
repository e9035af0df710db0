//! Loan management service

use chrono::TimeDelta;
use std::sync::Arc;

use crate::{
    clock::Clock,
    config::LendingConfig,
    error::{AppError, AppResult},
    models::{Item, LoanDetails},
    repository::Repository,
    session::Session,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    clock: Arc<dyn Clock>,
    loan_period: TimeDelta,
}

impl LoansService {
    pub fn new(repository: Repository, config: &LendingConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let loan_period = TimeDelta::try_days(config.loan_period_days).ok_or_else(|| {
            AppError::Internal(format!(
                "Loan period of {} days is out of range",
                config.loan_period_days
            ))
        })?;

        Ok(Self {
            repository,
            clock,
            loan_period,
        })
    }

    /// Borrow an item for the session's patron. The loan is due one loan
    /// period after now; the item becomes unavailable in the same step.
    pub fn borrow(&self, session: &Session, item_id: i32) -> AppResult<Item> {
        let patron_id = session.require_patron()?;
        let issued_at = self.clock.now();
        let due_at = issued_at
            .checked_add_signed(self.loan_period)
            .ok_or_else(|| AppError::Internal("Due date out of range".to_string()))?;

        let item = self
            .repository
            .loans_create(patron_id, item_id, issued_at, due_at)?;
        tracing::info!(patron_id, item_id, due = %due_at.date_naive(), "Item borrowed");
        Ok(item)
    }

    /// Return an item held by the session's patron
    pub fn return_item(&self, session: &Session, item_id: i32) -> AppResult<Item> {
        let patron_id = session.require_patron()?;
        let item = self.repository.loans_return(patron_id, item_id)?;
        tracing::info!(patron_id, item_id, "Item returned");
        Ok(item)
    }

    /// Loans of the session's patron, in borrow order
    pub fn list_loans(&self, session: &Session) -> AppResult<Vec<LoanDetails>> {
        let patron_id = session.require_patron()?;
        self.repository.loans_for_patron(patron_id, self.clock.now())
    }
}
