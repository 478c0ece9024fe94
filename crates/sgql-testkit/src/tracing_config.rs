//! Tracing configuration for test output.
//!
//! Provides utilities for configuring tracing in tests with appropriate
//! output formatting and filtering, and a capture layer for asserting on
//! the events the decoders emit.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, Once, PoisonError};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize tracing for tests.
///
/// It's safe to call multiple times; only the first call will initialize tracing.
///
/// Uses the `RUST_LOG` environment variable if set, otherwise defaults to `info`.
///
/// # Example
///
/// ```rust
/// use sgql_testkit::init_test_tracing;
///
/// init_test_tracing();
/// ```
pub fn init_test_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sgql_core=debug".to_string());
    init_test_tracing_with_filter(&filter);
}

/// Initialize tracing with a specific filter.
///
/// Shares the guard with [`init_test_tracing`]: whichever runs first wins.
///
/// # Example
///
/// ```rust
/// use sgql_testkit::init_test_tracing_with_filter;
///
/// init_test_tracing_with_filter("sgql_core=trace");
/// ```
pub fn init_test_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(EnvFilter::new(filter))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_ansi(true)
                    .compact(),
            )
            .init();
    });
}

/// A captured tracing event.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    /// Event level (trace, debug, info, warn, error)
    pub level: Level,
    /// Event message
    pub message: String,
    /// Event target (module path)
    pub target: String,
    /// Structured fields other than the message, formatted.
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    /// Formatted value of a structured field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let formatted = format!("{value:?}");
        if field.name() == "message" {
            self.message = formatted;
        } else {
            self.fields.push((field.name().to_string(), formatted));
        }
    }
}

/// Captures tracing events emitted while [`TracingCapture::run`] executes.
///
/// The capture installs its own subscriber for the duration of the closure
/// on the current thread, independent of any global test subscriber.
#[derive(Debug, Clone, Default)]
pub struct TracingCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for TracingCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        let metadata = event.metadata();
        self.lock().push(CapturedEvent {
            level: *metadata.level(),
            message: visitor.message,
            target: metadata.target().to_string(),
            fields: visitor.fields,
        });
    }
}

impl TracingCapture {
    /// Create a new tracing capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with this capture as the thread's subscriber.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get all captured events.
    #[must_use]
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.lock().clone()
    }

    /// Captured events at `level`.
    #[must_use]
    pub fn events_at(&self, level: Level) -> Vec<CapturedEvent> {
        self.lock()
            .iter()
            .filter(|event| event.level == level)
            .cloned()
            .collect()
    }

    /// Check if any event contains the given message.
    #[must_use]
    pub fn contains(&self, message: &str) -> bool {
        self.lock().iter().any(|e| e.message.contains(message))
    }

    /// Check if any warning event was logged.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.lock().iter().any(|e| e.level == Level::WARN)
    }

    /// Assert no warnings were logged.
    ///
    /// # Panics
    ///
    /// Panics if any warning events were captured.
    pub fn assert_no_warnings(&self) {
        let warnings = self.events_at(Level::WARN);
        assert!(
            warnings.is_empty(),
            "Expected no warnings but found: {warnings:?}"
        );
    }

    /// Clear all captured events.
    pub fn clear(&self) {
        self.lock().clear();
    }
}
