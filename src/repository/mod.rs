//! Repository layer: in-memory catalog and patron stores

pub mod items;
pub mod loans;
pub mod patrons;
pub mod seed;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{AppError, AppResult},
    models::{Item, Patron},
};

/// Both stores live behind a single lock so borrow and return touch
/// items and loans in one critical section.
#[derive(Debug, Default)]
pub(crate) struct Store {
    pub(crate) items: Vec<Item>,
    pub(crate) patrons: Vec<Patron>,
    /// Bumped on every catalog mutation (new item, availability change)
    pub(crate) version: u64,
}

/// Main repository struct; clones share the same stores
#[derive(Debug, Clone, Default)]
pub struct Repository {
    store: Arc<RwLock<Store>>,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog version, used to invalidate derived data such as the search model
    pub fn version(&self) -> AppResult<u64> {
        Ok(self.read()?.version)
    }

    pub(crate) fn read(&self) -> AppResult<RwLockReadGuard<'_, Store>> {
        self.store
            .read()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))
    }

    pub(crate) fn write(&self) -> AppResult<RwLockWriteGuard<'_, Store>> {
        self.store
            .write()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))
    }
}
