//! Patron model and related types

use serde::{Deserialize, Serialize};

use super::loan::Loan;

/// Patron with credential and active loans, in borrow order
#[derive(Debug, Clone)]
pub struct Patron {
    pub id: i32,
    pub name: String,
    /// Argon2 PHC string; the plaintext secret is never stored
    pub password_hash: String,
    pub loans: Vec<Loan>,
}

impl Patron {
    pub fn short(&self) -> PatronShort {
        PatronShort {
            id: self.id,
            name: self.name.clone(),
        }
    }

    pub fn loan_position(&self, item_id: i32) -> Option<usize> {
        self.loans.iter().position(|loan| loan.item_id == item_id)
    }
}

/// Public patron identity, safe to hand to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatronShort {
    pub id: i32,
    pub name: String,
}
