//! Cooperative cancellation for long-running generation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A shared flag that aborts solid generation between rows.
///
/// Cloning the token shares the underlying flag. The scheduler checks it
/// before each row; once tripped, remaining rows are abandoned, partial
/// output is discarded, and the build returns
/// [`SolidError::Cancelled`](crate::SolidError::Cancelled). Nothing is ever
/// written from a cancelled build.
///
/// # Example
///
/// ```
/// use relief_solid::CancelToken;
///
/// let token = CancelToken::new();
/// let watcher = token.clone();
/// assert!(!watcher.is_cancelled());
/// token.cancel();
/// assert!(watcher.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, untripped token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the flag. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether the flag has been tripped.
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
