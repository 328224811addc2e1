//! Explicit cancellation token threaded through the long passes.
//!
//! Segmentation and encoding check the token between boundary searches and
//! between encoder invocations; a cancelled run surfaces as
//! `SplitError::Cancelled` rather than flipping shared global state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
