// file: src/logging/logger.rs
// version: 2.1.0
// guid: adb033c3-e9eb-4121-b5d3-d947ea16dce0

//! Logger initialization and configuration

use crate::{config::Verbosity, error::QwrError, Result};
use tracing::Instrument;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a verbosity level
pub fn filter_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Verbose => "debug",
    }
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout carries only help, version and dry-run
/// output.
pub fn init_logger(verbosity: Verbosity) -> Result<()> {
    let filter = EnvFilter::new(filter_directive(verbosity));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| QwrError::logging(e.to_string()))?;

    Ok(())
}

/// Run `f` inside a named span
pub fn with_operation_span<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let span = tracing::info_span!("operation", name = operation);
    let _enter = span.enter();
    f()
}

/// Async variant of [`with_operation_span`]
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
        assert_eq!(filter_directive(Verbosity::Quiet), "error");
        assert_eq!(filter_directive(Verbosity::Normal), "warn");
        assert_eq!(filter_directive(Verbosity::Verbose), "debug");
    }

    #[test]
    fn test_init_logger_twice_reports_error() {
        // The global subscriber can only be set once per process; whichever
        // call loses must surface a Logging error instead of panicking.
        let first = init_logger(Verbosity::Normal);
        let second = init_logger(Verbosity::Verbose);

        assert!(second.is_err());
        if first.is_err() {
            assert!(matches!(first, Err(QwrError::Logging(_))));
        }
        assert!(matches!(second, Err(QwrError::Logging(_))));
    }

    #[test]
    fn test_with_operation_span() {
        let result = with_operation_span("build", || 2 + 2);
        assert_eq!(result, 4);
    }

    #[tokio::test]
    async fn test_with_async_operation_span() {
        let result = with_async_operation_span("execute", || async { "done" }).await;
        assert_eq!(result, "done");
    }
}
