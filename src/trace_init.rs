//! JSONL trace output for the transliteration pipeline.
//!
//! Only active with the `trace` feature. Spans are written by a background
//! worker; the returned [`TraceGuard`] must outlive the traced work, and
//! dropping it flushes whatever is still queued.

use std::path::Path;

/// File the subscriber writes into, relative to the log directory.
pub const TRACE_FILE_NAME: &str = "gokturk-trace.jsonl";

/// Keeps the background trace writer alive until dropped.
#[must_use = "dropping the guard stops and flushes trace output"]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Route pipeline spans to `<log_dir>/gokturk-trace.jsonl`.
///
/// Only the first call installs the subscriber; later calls return an
/// inert guard.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> TraceGuard {
    use std::sync::Once;

    static INIT: Once = Once::new();

    let mut worker = None;
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE_NAME);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        worker = Some(guard);

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(
                        "gok_core=debug,gok_session=debug,gok_engine=debug",
                    )
                }),
            )
            .init();
    });
    TraceGuard { _worker: worker }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> TraceGuard {
    TraceGuard {}
}
