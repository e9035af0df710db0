//! End-to-end tests of the `Library` facade

mod lending_tests;
mod search_tests;

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use shelfmark::{config::AuthConfig, AppConfig, FixedClock, Library};

pub fn borrow_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 14, 0, 0).unwrap()
}

/// Seeded library with cheap hashing and a frozen clock
pub fn library() -> Library {
    let config = AppConfig {
        auth: AuthConfig::low_cost(),
        ..AppConfig::default()
    };
    Library::with_clock(config, Arc::new(FixedClock(borrow_time()))).expect("library")
}
