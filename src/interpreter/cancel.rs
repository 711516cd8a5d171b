use std::sync::{Arc,
                atomic::{AtomicBool, Ordering}};

/// A cooperative cancellation flag for long-running approximations.
///
/// The core is synchronous; the only potentially long operation is the
/// iterative approximation of an irrational result. That loop polls a
/// `CancelToken` once per iteration and bails out with
/// [`crate::error::EvalError::Cancelled`] when the flag is set — it never
/// returns a partial value.
///
/// Clones share one flag, so a front end can keep a clone on another thread
/// and trip it while an evaluation is in flight.
///
/// # Example
/// ```
/// use exacta::interpreter::cancel::CancelToken;
///
/// let token = CancelToken::new();
/// let watcher = token.clone();
/// assert!(!watcher.is_cancelled());
///
/// token.cancel();
/// assert!(watcher.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trips the flag. Every clone of this token observes the cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`CancelToken::cancel`] has been called on any
    /// clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
