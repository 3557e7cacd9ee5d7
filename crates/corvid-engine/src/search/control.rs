//! Cooperative cancellation: a concurrency boundary, not a parallelism one.
//!
//! The search itself runs synchronously and never suspends mid-tree; only
//! the iterative-deepening driver suspends, waiting for a per-depth worker
//! to either finish or be told to give up. [`SearchControl`] is the token
//! consulted at each recursion entry to decide which.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable cancellation flag shared between a driver and the worker it
/// spawned for one depth of iterative deepening.
///
/// Cloning shares the same underlying flag; it does not create an
/// independent token. Checked with [`Ordering::Relaxed`] since cancellation
/// is advisory timing, not a correctness-critical synchronization point —
/// a search that observes the flag one recursion late simply does a little
/// extra, harmless work before unwinding.
#[derive(Debug, Clone, Default)]
pub struct SearchControl {
    cancelled: Arc<AtomicBool>,
}

impl SearchControl {
    /// A fresh, not-yet-cancelled token.
    pub fn new() -> SearchControl {
        SearchControl {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Signal cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been signaled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
