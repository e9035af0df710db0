//! Loans repository. Every mutation here updates the item and the patron's
//! loan sequence under the same write guard.

use chrono::{DateTime, Utc};

use crate::{
    error::{AppError, AppResult},
    models::{Item, Loan, LoanDetails},
};

use super::{Repository, Store};

fn patron_index(store: &Store, patron_id: i32) -> AppResult<usize> {
    store
        .patrons
        .iter()
        .position(|p| p.id == patron_id)
        .ok_or(AppError::NotAuthenticated)
}

fn item_index(store: &Store, item_id: i32) -> AppResult<usize> {
    store
        .items
        .iter()
        .position(|i| i.id == item_id)
        .ok_or(AppError::ItemNotFound(item_id))
}

impl Repository {
    /// Record a loan and mark the item unavailable
    pub fn loans_create(
        &self,
        patron_id: i32,
        item_id: i32,
        issued_at: DateTime<Utc>,
        due_at: DateTime<Utc>,
    ) -> AppResult<Item> {
        let mut store = self.write()?;
        let patron_idx = patron_index(&store, patron_id)?;
        let item_idx = item_index(&store, item_id)?;

        if !store.items[item_idx].available {
            return Err(AppError::ItemUnavailable(item_id));
        }

        store.patrons[patron_idx].loans.push(Loan {
            item_id,
            issued_at,
            due_at,
        });
        store.items[item_idx].available = false;
        store.version += 1;

        Ok(store.items[item_idx].clone())
    }

    /// Remove the patron's loan on the item and make the item available again
    pub fn loans_return(&self, patron_id: i32, item_id: i32) -> AppResult<Item> {
        let mut store = self.write()?;
        let patron_idx = patron_index(&store, patron_id)?;
        let item_idx = item_index(&store, item_id)?;

        let loan_idx = store.patrons[patron_idx]
            .loan_position(item_id)
            .ok_or(AppError::NotBorrowed(item_id))?;

        store.patrons[patron_idx].loans.remove(loan_idx);
        store.items[item_idx].available = true;
        store.version += 1;

        Ok(store.items[item_idx].clone())
    }

    /// Patron's loans in borrow order, joined with item titles
    pub fn loans_for_patron(&self, patron_id: i32, now: DateTime<Utc>) -> AppResult<Vec<LoanDetails>> {
        let store = self.read()?;
        let patron_idx = patron_index(&store, patron_id)?;

        store.patrons[patron_idx]
            .loans
            .iter()
            .map(|loan| -> AppResult<LoanDetails> {
                let item = &store.items[item_index(&store, loan.item_id)?];
                Ok(LoanDetails {
                    item_id: item.id,
                    title: item.title.clone(),
                    due_date: loan.due_at.date_naive(),
                    is_overdue: loan.due_at < now,
                })
            })
            .collect()
    }
}
