/*!
 * Structured Tracing
 * Tracing setup and timed spans for process primitives
 *
 * Everything is written to stderr: stdout belongs to the demos and is
 * shared by parent and child after duplication.
 */

use std::time::Instant;
use tracing::{debug, info, span, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::core::types::Pid;

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
/// - FORKDEMO_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var("FORKDEMO_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Timed span around one blocking process primitive (fork, waitpid, sh -c)
pub struct PrimitiveSpan {
    span: tracing::Span,
    start: Instant,
    primitive: &'static str,
}

impl PrimitiveSpan {
    pub fn new(primitive: &'static str, pid: Pid) -> Self {
        let span = span!(
            Level::DEBUG,
            "primitive",
            primitive = primitive,
            pid = pid.as_raw(),
            duration_ms = tracing::field::Empty,
            result = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            primitive,
        }
    }

    pub fn record_result(&self, success: bool) {
        self.span
            .record("result", if success { "success" } else { "error" });
    }

    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for PrimitiveSpan {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        self.span.record("duration_ms", elapsed.as_millis() as u64);
        let _entered = self.span.enter();
        debug!(
            primitive = self.primitive,
            duration_ms = elapsed.as_millis() as u64,
            "primitive completed"
        );
    }
}
