//! Data models for the lending ledger

pub mod book;
pub mod ticket;
pub mod user;

// Re-export commonly used types
pub use book::{Book, LoanStatus};
pub use ticket::Ticket;
pub use user::{Role, User};
