//! Shelfmark
//!
//! Search-and-lending engine for a small library catalog: TF-IDF ranking of
//! catalog items against free-text queries, and a borrowing state machine
//! that keeps item availability and patron loans consistent.

use std::sync::Arc;

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod search;
pub mod services;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use session::Session;

use models::{CreateItem, Item, ItemShort, LoanDetails, PatronShort};
use repository::Repository;
use services::Services;

/// Single-user entry point used by front-ends: the services plus the
/// session of whoever sits at the terminal.
#[derive(Clone)]
pub struct Library {
    pub config: Arc<AppConfig>,
    pub services: Services,
    session: Session,
}

impl Library {
    /// Library over the seed catalog and patrons, using wall-clock time
    pub fn new(config: AppConfig) -> AppResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let argon2 = services::auth::argon2_from(&config.auth)?;
        let repository = Repository::seeded(|p| services::auth::hash_password(&argon2, p))?;
        Self::from_parts(config, repository, clock)
    }

    /// Library over an existing repository
    pub fn from_parts(config: AppConfig, repository: Repository, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let services = Services::new(repository, &config, clock)?;
        Ok(Self {
            config: Arc::new(config),
            services,
            session: Session::new(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn authenticate(&mut self, username: &str, password: &str) -> AppResult<PatronShort> {
        self.services.auth.authenticate(&mut self.session, username, password)
    }

    pub fn logout(&mut self) -> Option<PatronShort> {
        self.services.auth.logout(&mut self.session)
    }

    pub fn search(&self, query: &str) -> AppResult<Vec<ItemShort>> {
        self.services.catalog.search(query)
    }

    pub fn borrow(&self, item_id: i32) -> AppResult<Item> {
        self.services.loans.borrow(&self.session, item_id)
    }

    pub fn return_item(&self, item_id: i32) -> AppResult<Item> {
        self.services.loans.return_item(&self.session, item_id)
    }

    pub fn list_loans(&self) -> AppResult<Vec<LoanDetails>> {
        self.services.loans.list_loans(&self.session)
    }

    pub fn add_item(&self, title: &str, author: &str, genre: &str) -> AppResult<Item> {
        self.services.catalog.add_item(CreateItem::new(title, author, genre))
    }

    pub fn list_stock(&self) -> AppResult<Vec<Item>> {
        self.services.catalog.list_stock()
    }
}
