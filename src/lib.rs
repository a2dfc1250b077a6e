//! Libris lending ledger
//!
//! An in-memory library lending ledger: which books exist, which users
//! may borrow them, which books are out, to whom, since when, and which
//! loans are overdue. The [`Ledger`] aggregate is the sole mutator of
//! book and ticket state and is safe to share across concurrent tasks.

pub mod clock;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;

pub use config::LedgerConfig;
pub use error::{LedgerError, LedgerResult};
pub use ledger::{CheckInOutcome, CheckoutOutcome, Ledger};
