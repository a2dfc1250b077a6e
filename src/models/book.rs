//! Book inventory model

use serde::{Deserialize, Serialize};

use super::ticket::Ticket;

/// Loan status of a book, derived from its most recent ticket.
///
/// Transitions: `Available` → `OnLoan` on successful checkout,
/// `OnLoan` → `Available` on check-in by the borrower. Nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    Available,
    OnLoan,
}

/// Inventory item, keyed by its library reference number.
///
/// Holds at most the most recent ticket, active or not; `None` means the
/// book was never borrowed. Only the ledger mutates ticket state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    reference_number: i32,
    ticket: Option<Ticket>,
}

impl Book {
    pub fn new(reference_number: i32) -> Self {
        Self {
            reference_number,
            ticket: None,
        }
    }

    pub fn reference_number(&self) -> i32 {
        self.reference_number
    }

    /// Most recent loan event, if the book was ever borrowed.
    pub fn ticket(&self) -> Option<&Ticket> {
        self.ticket.as_ref()
    }

    pub fn status(&self) -> LoanStatus {
        match &self.ticket {
            Some(ticket) if ticket.is_active() => LoanStatus::OnLoan,
            _ => LoanStatus::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status() == LoanStatus::Available
    }

    /// Replace the book's ticket with a fresh loan.
    pub(crate) fn attach_ticket(&mut self, ticket: Ticket) {
        self.ticket = Some(ticket);
    }

    pub(crate) fn ticket_mut(&mut self) -> Option<&mut Ticket> {
        self.ticket.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn new_book_is_available() {
        let book = Book::new(1);
        assert_eq!(book.status(), LoanStatus::Available);
        assert!(book.ticket().is_none());
    }

    #[test]
    fn status_follows_the_ticket() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single().expect("valid date");
        let mut book = Book::new(1);

        book.attach_ticket(Ticket::new(5, now));
        assert_eq!(book.status(), LoanStatus::OnLoan);
        assert!(!book.is_available());

        if let Some(ticket) = book.ticket_mut() {
            ticket.close();
        }
        assert_eq!(book.status(), LoanStatus::Available);
        // History survives the return
        assert!(book.ticket().is_some());
    }
}
