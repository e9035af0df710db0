//! Data models for Shelfmark

pub mod item;
pub mod loan;
pub mod patron;

// Re-export commonly used types
pub use item::{CreateItem, Item, ItemShort};
pub use loan::{Loan, LoanDetails};
pub use patron::{Patron, PatronShort};
