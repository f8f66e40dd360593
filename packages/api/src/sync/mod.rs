//! # Cached resources kept in step with the backend
//!
//! [`DocumentSync`] and [`UserDirectory`] share one discipline:
//!
//! - The credential always comes from the [`SessionStore`](crate::SessionStore);
//!   with no credential nothing is requested.
//! - A listing replaces the cache wholesale. Each listing takes a number from a
//!   [`Generation`] counter and its response is applied only if no newer
//!   listing was started meanwhile, so an out-of-order reply cannot overwrite
//!   fresher data.
//! - Mutations never patch the cache. On success they re-list; on failure the
//!   cache is left alone.
//! - A 401 anywhere ends the session and sends the navigator to login.

mod documents;
mod users;

pub use documents::{DocumentSync, DocumentsState};
pub use users::{UserDirectory, UsersState};

use std::cell::Cell;
use std::rc::Rc;

/// Monotonic request counter for stale-response rejection.
#[derive(Clone, Debug, Default)]
pub(crate) struct Generation(Rc<Cell<u64>>);

impl Generation {
    /// Issue the next number. It is now the only current one.
    pub(crate) fn next(&self) -> u64 {
        let n = self.0.get() + 1;
        self.0.set(n);
        n
    }

    pub(crate) fn is_current(&self, n: u64) -> bool {
        self.0.get() == n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_generation_is_current() {
        let generation = Generation::default();
        let first = generation.next();
        assert!(generation.is_current(first));

        let second = generation.clone().next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
