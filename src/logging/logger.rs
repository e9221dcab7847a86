// file: src/logging/logger.rs
// version: 1.0.0
// guid: 7dfb4938-ad11-44ec-b15d-34bf3aba755c

//! Logger initialization and configuration

use crate::error::BuildError;
use crate::Result;
use tracing::Instrument;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive used for the given verbosity flags
pub fn filter_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = EnvFilter::new(filter_directive(verbose, quiet));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| BuildError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}

/// Run an async operation inside a named span
pub async fn with_async_operation_span<F, Fut, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = R>,
{
    let span = tracing::info_span!("operation", name = operation);
    async move { f().await }.instrument(span).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(false, false), "info");
        assert_eq!(filter_directive(true, false), "debug");
        assert_eq!(filter_directive(false, true), "error");
        // quiet wins over verbose
        assert_eq!(filter_directive(true, true), "error");
    }

    #[test]
    fn test_init_logger_twice_fails_gracefully() {
        // The global subscriber can only be set once per process
        let _ = init_logger(false, false);
        assert!(init_logger(true, false).is_err());
    }

    #[tokio::test]
    async fn test_with_async_operation_span() {
        let result = with_async_operation_span("build", || async { 42 }).await;
        assert_eq!(result, 42);
    }
}
