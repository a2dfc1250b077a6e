//! The lending ledger aggregate

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};
use tokio::sync::RwLock;
use validator::Validate;

use crate::{
    clock::{Clock, SystemClock},
    config::LedgerConfig,
    error::{LedgerError, LedgerResult},
    models::{Book, Ticket, User},
};

/// Result of a checkout attempt.
///
/// Both variants are expected outcomes of normal use; faults such as an
/// unknown reference number come back as `LedgerError` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The loan was created; this active ticket is now attached to the book.
    Loaned(Ticket),
    /// The book is already out. Carries an inactive ticket recording the
    /// caller and the time of the rejected attempt.
    Unavailable(Ticket),
}

impl CheckoutOutcome {
    pub fn is_loaned(&self) -> bool {
        matches!(self, CheckoutOutcome::Loaned(_))
    }

    pub fn ticket(&self) -> &Ticket {
        match self {
            CheckoutOutcome::Loaned(ticket) | CheckoutOutcome::Unavailable(ticket) => ticket,
        }
    }
}

/// Result of a check-in attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// The caller's active loan was closed; holds the closed ticket.
    Returned(Ticket),
    /// The active loan belongs to someone else; nothing changed.
    NotBorrower,
    /// The book has no active loan; nothing changed.
    NoActiveLoan,
}

#[derive(Debug, Default)]
struct LedgerState {
    books: HashMap<i32, Book>,
    users: HashMap<i32, User>,
}

/// The aggregate owning books and users and enforcing the lending rules.
///
/// All mutation of book and ticket state goes through the operations on
/// this type; the collections themselves are never exposed. Operations
/// take `&self` and are safe to call from concurrent tasks: checkout's
/// lookup, eligibility check and ticket attachment run as one unit under
/// the write lock, so two concurrent checkouts of the same available
/// book cannot both succeed.
pub struct Ledger {
    state: RwLock<LedgerState>,
    clock: Arc<dyn Clock>,
    loan_period: Duration,
    zone: FixedOffset,
}

impl Ledger {
    /// Ledger on the system clock.
    pub fn new(config: &LedgerConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Ledger on an injected clock, so tests can pin or advance "now".
    pub fn with_clock(config: &LedgerConfig, clock: Arc<dyn Clock>) -> Self {
        let zone = FixedOffset::east_opt(config.loan.utc_offset_minutes * 60)
            .unwrap_or_else(|| Utc.fix());
        Self {
            state: RwLock::new(LedgerState::default()),
            clock,
            loan_period: Duration::days(config.loan.period_days),
            zone,
        }
    }

    /// Register a book.
    ///
    /// Re-registering an identical book is an idempotent no-op; a
    /// different book under an already-used reference number is rejected.
    pub async fn register_book(&self, book: Book) -> LedgerResult<()> {
        let mut state = self.state.write().await;
        match state.books.get(&book.reference_number()) {
            Some(existing) if *existing == book => Ok(()),
            Some(_) => Err(LedgerError::DuplicateReference(book.reference_number())),
            None => {
                tracing::info!(reference = book.reference_number(), "book registered");
                state.books.insert(book.reference_number(), book);
                Ok(())
            }
        }
    }

    /// Register a user, after validating it. Same duplicate rule as
    /// [`register_book`](Self::register_book), keyed on the user id.
    pub async fn register_user(&self, user: User) -> LedgerResult<()> {
        user.validate()?;
        let mut state = self.state.write().await;
        match state.users.get(&user.id) {
            Some(existing) if *existing == user => Ok(()),
            Some(_) => Err(LedgerError::DuplicateUser(user.id)),
            None => {
                tracing::info!(user = user.id, username = %user.username, "user registered");
                state.users.insert(user.id, user);
                Ok(())
            }
        }
    }

    /// Attempt to lend the book with `reference_number` to `user`.
    ///
    /// Only the reference number identifies the book; any book value the
    /// caller holds is not trusted. The lookup, eligibility check and
    /// ticket attachment happen atomically under the write lock.
    pub async fn checkout(&self, user: &User, reference_number: i32) -> LedgerResult<CheckoutOutcome> {
        let now = self.clock.now();
        let mut state = self.state.write().await;
        let book = state
            .books
            .get_mut(&reference_number)
            .ok_or(LedgerError::BookNotFound(reference_number))?;

        if book.is_available() {
            let ticket = Ticket::new(user.id, now);
            book.attach_ticket(ticket.clone());
            tracing::info!(reference = reference_number, user = user.id, "book checked out");
            Ok(CheckoutOutcome::Loaned(ticket))
        } else {
            tracing::debug!(
                reference = reference_number,
                user = user.id,
                "checkout rejected: book is on loan"
            );
            Ok(CheckoutOutcome::Unavailable(Ticket::rejected(user.id, now)))
        }
    }

    /// Close the active loan on `reference_number`, but only if it
    /// belongs to `user`. Mismatches change nothing and are reported as
    /// outcome values; a second check-in reports `NoActiveLoan`.
    pub async fn check_in(&self, user: &User, reference_number: i32) -> LedgerResult<CheckInOutcome> {
        let mut state = self.state.write().await;
        let book = state
            .books
            .get_mut(&reference_number)
            .ok_or(LedgerError::BookNotFound(reference_number))?;

        match book.ticket_mut() {
            Some(ticket) if ticket.is_active() && ticket.borrower_id() == user.id => {
                ticket.close();
                let closed = ticket.clone();
                tracing::info!(reference = reference_number, user = user.id, "book checked in");
                Ok(CheckInOutcome::Returned(closed))
            }
            Some(ticket) if ticket.is_active() => {
                tracing::debug!(
                    reference = reference_number,
                    user = user.id,
                    borrower = ticket.borrower_id(),
                    "check-in rejected: not the borrower"
                );
                Ok(CheckInOutcome::NotBorrower)
            }
            _ => Ok(CheckInOutcome::NoActiveLoan),
        }
    }

    /// All books on active loan whose due date has passed. Admin only;
    /// result order is unspecified.
    pub async fn overdue_books(&self, user: &User) -> LedgerResult<Vec<Book>> {
        self.require_admin(user, "overdue report")?;
        let now = self.clock.now();
        let state = self.state.read().await;
        Ok(state
            .books
            .values()
            .filter(|book| {
                book.ticket()
                    .map(|ticket| ticket.is_overdue(self.loan_period, now))
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    /// Pure lookup by reference number.
    pub async fn find_book(&self, reference_number: i32) -> Option<Book> {
        self.state.read().await.books.get(&reference_number).cloned()
    }

    /// Pure lookup by user id.
    pub async fn find_user(&self, id: i32) -> Option<User> {
        self.state.read().await.users.get(&id).cloned()
    }

    /// Authenticate by exact equality on username and password.
    ///
    /// Placeholder contract: no hashing, no rate limiting, no sessions.
    /// Any mismatch is `UserNotFound`, without distinguishing which
    /// field was wrong.
    pub async fn login(&self, username: &str, password: &str) -> LedgerResult<User> {
        let state = self.state.read().await;
        state
            .users
            .values()
            .find(|user| user.username == username && user.password == password)
            .cloned()
            .ok_or_else(|| {
                tracing::debug!(username, "login failed");
                LedgerError::UserNotFound
            })
    }

    /// Number of books currently on active loan.
    pub async fn count_active_loans(&self) -> usize {
        let state = self.state.read().await;
        state.books.values().filter(|book| !book.is_available()).count()
    }

    /// Number of overdue loans. Admin only, like the full report.
    pub async fn count_overdue_loans(&self, user: &User) -> LedgerResult<usize> {
        self.overdue_books(user).await.map(|books| books.len())
    }

    /// Due date of a ticket, in the configured time zone.
    pub fn due_date(&self, ticket: &Ticket) -> DateTime<FixedOffset> {
        ticket.due_date(self.loan_period).with_timezone(&self.zone)
    }

    fn require_admin(&self, user: &User, operation: &str) -> LedgerResult<()> {
        if user.role.is_admin() {
            Ok(())
        } else {
            tracing::warn!(user = user.id, operation, "permission denied");
            Err(LedgerError::PermissionDenied(format!(
                "administrator role required for {}",
                operation
            )))
        }
    }
}
