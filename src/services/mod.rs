//! Business logic services

pub mod auth;
pub mod catalog;
pub mod loans;

use std::sync::Arc;

use crate::{clock::Clock, config::AppConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoansService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository, config: &AppConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        Ok(Self {
            auth: auth::AuthService::new(repository.clone(), &config.auth)?,
            catalog: catalog::CatalogService::new(repository.clone(), config.search.clone()),
            loans: loans::LoansService::new(repository, &config.lending, clock)?,
        })
    }
}
