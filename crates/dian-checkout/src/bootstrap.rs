//! # Bootstrap Guard
//!
//! One-time initialization guard for the host's startup sequence. The
//! checkout integration registers side-effecting setup (field injection,
//! submission handlers) from a single entry point that must not run
//! twice; this guard makes that rule explicit and thread-safe instead of
//! leaving it to a mutable flag inside the host.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

/// Failure to run the host's initialization closure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// A previous [`Bootstrap::run`] already completed.
    #[error("checkout integration can only be bootstrapped once")]
    AlreadyBootstrapped,

    /// The initialization closure itself failed. The guard stays unset so
    /// the host may retry after fixing its configuration.
    #[error("bootstrap failed: {0}")]
    Init(String),
}

/// One-shot initialization guard.
///
/// `run` executes the supplied closure at most once over the guard's
/// lifetime, even under concurrent calls. The guard is owned by the host
/// application's startup sequence, not by the validation core.
#[derive(Debug, Default)]
pub struct Bootstrap {
    bootstrapped: AtomicBool,
}

impl Bootstrap {
    /// A fresh, unset guard. `const` so hosts can hold one in a static.
    pub const fn new() -> Self {
        Self {
            bootstrapped: AtomicBool::new(false),
        }
    }

    /// Whether an initialization closure has completed.
    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped.load(Ordering::Acquire)
    }

    /// Run `init` exactly once.
    ///
    /// # Errors
    ///
    /// - [`BootstrapError::AlreadyBootstrapped`] if a previous call won
    ///   the guard (whether or not it has finished running `init`).
    /// - [`BootstrapError::Init`] if `init` itself fails; the guard is
    ///   released so a later call may retry.
    pub fn run<F, E>(&self, init: F) -> Result<(), BootstrapError>
    where
        F: FnOnce() -> Result<(), E>,
        E: std::fmt::Display,
    {
        if self
            .bootstrapped
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(BootstrapError::AlreadyBootstrapped);
        }

        if let Err(e) = init() {
            tracing::warn!(error = %e, "bootstrap initialization failed");
            self.bootstrapped.store(false, Ordering::Release);
            return Err(BootstrapError::Init(e.to_string()));
        }

        tracing::debug!("checkout integration bootstrapped");
        Ok(())
    }
}
