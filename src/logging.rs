use std::io::stderr;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::PlaytomicError;

/// Installs a process-wide subscriber that logs this crate at debug level to
/// stderr. `RUST_LOG` directives still take precedence.
///
/// The crate only emits `tracing` events; embedding applications that already
/// configure their own subscriber should skip this helper.
pub fn init() -> Result<(), PlaytomicError> {
    let directive = "playtomic_client=debug"
        .parse()
        .map_err(|e| PlaytomicError::log_setup_error(format!("Invalid log directive: {e}")))?;

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(stderr)
                .with_filter(EnvFilter::from_default_env().add_directive(directive)),
        )
        .try_init()
        .map_err(|e| PlaytomicError::log_setup_error(format!("Failed to set subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_fails_cleanly() {
        // The first call may or may not win the global slot depending on test
        // order; the second is guaranteed to fail with a log setup error.
        let _ = init();
        let second = init();
        assert!(matches!(second, Err(PlaytomicError::LogSetup(_))));
    }
}
