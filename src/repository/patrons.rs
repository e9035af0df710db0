//! Patrons repository

use crate::{
    error::{AppError, AppResult},
    models::{Patron, PatronShort},
};

use super::Repository;

impl Repository {
    /// Register a patron with an already-hashed credential
    pub fn patrons_create(&self, name: &str, password_hash: String) -> AppResult<PatronShort> {
        let mut store = self.write()?;
        let id = store.patrons.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        let patron = Patron {
            id,
            name: name.to_string(),
            password_hash,
            loans: Vec::new(),
        };
        let short = patron.short();
        store.patrons.push(patron);

        Ok(short)
    }

    /// Exact, case-sensitive name lookup
    pub fn patrons_get_by_name(&self, name: &str) -> AppResult<Option<Patron>> {
        Ok(self
            .read()?
            .patrons
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    /// An unknown id means the caller's session names no registered patron
    pub fn patrons_get_by_id(&self, id: i32) -> AppResult<Patron> {
        self.read()?
            .patrons
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(AppError::NotAuthenticated)
    }
}
