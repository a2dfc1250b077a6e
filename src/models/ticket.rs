//! Checkout ticket model

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single loan event.
///
/// The borrower and checkout timestamp are set once at construction and
/// never change; the only mutation over a ticket's lifetime is closing
/// it on check-in, which flips the active flag to false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    borrower_id: i32,
    checked_out_on: DateTime<Utc>,
    active: bool,
}

impl Ticket {
    /// Active ticket opening a new loan.
    pub(crate) fn new(borrower_id: i32, checked_out_on: DateTime<Utc>) -> Self {
        Self {
            borrower_id,
            checked_out_on,
            active: true,
        }
    }

    /// Inactive ticket recording a rejected checkout attempt.
    pub(crate) fn rejected(borrower_id: i32, at: DateTime<Utc>) -> Self {
        Self {
            borrower_id,
            checked_out_on: at,
            active: false,
        }
    }

    pub fn borrower_id(&self) -> i32 {
        self.borrower_id
    }

    pub fn checked_out_on(&self) -> DateTime<Utc> {
        self.checked_out_on
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Due date: checkout time plus the loan period.
    pub fn due_date(&self, loan_period: Duration) -> DateTime<Utc> {
        self.checked_out_on + loan_period
    }

    /// A loan is overdue strictly after its due date, never at it.
    pub fn is_overdue(&self, loan_period: Duration, now: DateTime<Utc>) -> bool {
        self.active && now > self.due_date(loan_period)
    }

    pub(crate) fn close(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, h, 0, 0).single().expect("valid date")
    }

    #[test]
    fn overdue_is_strict() {
        let ticket = Ticket::new(1, at(12));
        let period = Duration::days(3);
        let due = ticket.due_date(period);

        assert!(!ticket.is_overdue(period, due - Duration::seconds(1)));
        assert!(!ticket.is_overdue(period, due));
        assert!(ticket.is_overdue(period, due + Duration::seconds(1)));
    }

    #[test]
    fn closed_ticket_is_never_overdue() {
        let mut ticket = Ticket::new(1, at(12));
        let period = Duration::days(3);
        ticket.close();

        assert!(!ticket.is_active());
        assert!(!ticket.is_overdue(period, at(12) + Duration::days(30)));
    }

    #[test]
    fn closing_preserves_the_checkout_timestamp() {
        let mut ticket = Ticket::new(7, at(9));
        ticket.close();
        assert_eq!(ticket.checked_out_on(), at(9));
        assert_eq!(ticket.borrower_id(), 7);
    }
}
