//! Authenticated-patron session

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::PatronShort,
};

/// Which patron, if any, is logged in. Passed explicitly to every
/// operation that needs an identity.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    patron: Option<PatronShort>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            patron: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn patron(&self) -> Option<&PatronShort> {
        self.patron.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.patron.is_some()
    }

    /// Current patron id, or `NotAuthenticated`
    pub fn require_patron(&self) -> AppResult<i32> {
        self.patron
            .as_ref()
            .map(|p| p.id)
            .ok_or(AppError::NotAuthenticated)
    }

    pub(crate) fn sign_in(&mut self, patron: PatronShort) {
        self.patron = Some(patron);
    }

    pub fn sign_out(&mut self) -> Option<PatronShort> {
        self.patron.take()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
