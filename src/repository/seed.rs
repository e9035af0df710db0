//! Startup catalog and patrons

use crate::{
    error::AppResult,
    models::CreateItem,
};

use super::Repository;

/// (title, author, genre)
pub const SEED_ITEMS: &[(&str, &str, &str)] = &[
    ("Introduction to AI", "John Doe", "AI"),
    ("Data Science Basics", "Jane Smith", "Data Science"),
    ("Deep Learning Insights", "Geoff Hinton", "Deep Learning"),
    ("Machine Learning Advanced", "Andrew Ng", "Machine Learning"),
    ("Neural Networks Uncovered", "Ian Goodfellow", "Deep Learning"),
];

/// (name, password)
pub const SEED_PATRONS: &[(&str, &str)] = &[
    ("Alice", "alice123"),
    ("Bob", "bob123"),
    ("Charlie", "charlie123"),
];

impl Repository {
    /// Repository holding the seed catalog and patrons. `hash` turns each
    /// plaintext secret into the stored credential.
    pub fn seeded<F>(hash: F) -> AppResult<Self>
    where
        F: Fn(&str) -> AppResult<String>,
    {
        let repository = Self::new();

        for &(title, author, genre) in SEED_ITEMS {
            repository.items_create(&CreateItem::new(title, author, genre))?;
        }
        for &(name, password) in SEED_PATRONS {
            repository.patrons_create(name, hash(password)?)?;
        }

        Ok(repository)
    }
}
