//! Logging shim.
//!
//! With the `tracing` feature enabled, `debug!` and `warn!` come straight
//! from `tracing`. Without it they expand to nothing, so call sites stay
//! unconditional and cost nothing at runtime.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
mod noop {
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
