//! Injectable time source for due-date and overdue computation

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// The ledger never reads the system time directly; it asks its clock,
/// so tests can pin or advance "now".
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
