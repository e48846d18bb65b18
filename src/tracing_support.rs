//! Tracing support for observing the solver.
//!
//! This module re-exports the `tracing` macros when the `tracing` feature is
//! enabled and provides no-op replacements when it's disabled, so the solver
//! can emit events unconditionally.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    pub use tracing::{debug, debug_span, trace};

    /// Installs a formatting subscriber.  Safe to call more than once; only
    /// the first call has any effect, and a subscriber installed elsewhere
    /// wins.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt().with_target(false).try_init();
        });
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! trace {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::tracing_support::NoOpSpan
        };
    }

    pub use {debug, debug_span, trace};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
