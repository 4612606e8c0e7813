//! Capture layer for asserting on structured diagnostics in tests.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ::tracing::field::{Field, Visit};
use ::tracing::span::{Attributes, Id};
use ::tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// Structured fields keyed by name, values rendered as strings.
pub type Fields = BTreeMap<String, String>;

/// An emitted event.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapturedEvent {
    /// Event level.
    pub level: Level,
    /// Event target, usually the emitting module path.
    pub target: String,
    /// Structured fields, including `message`.
    pub fields: Fields,
}

impl CapturedEvent {
    /// Returns the event's message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.fields.get("message").map(String::as_str)
    }
}

/// A span that has been closed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapturedSpan {
    /// Span name.
    pub name: String,
    /// Fields recorded at creation or later via `record`.
    pub fields: Fields,
}

#[derive(Default)]
struct Captured {
    events: Vec<CapturedEvent>,
    spans: Vec<CapturedSpan>,
}

/// Layer recording every event and every closed span.
///
/// # Examples
/// ```
/// use ergraph_test_support::tracing::CaptureLayer;
/// use tracing_subscriber::layer::SubscriberExt;
///
/// let layer = CaptureLayer::default();
/// let subscriber = tracing_subscriber::registry().with(layer.clone());
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::info!(nodes = 3_u64, "hello");
/// });
/// let event = layer.find_event("hello").expect("event is captured");
/// assert_eq!(event.fields.get("nodes").map(String::as_str), Some("3"));
/// ```
#[derive(Clone, Default)]
pub struct CaptureLayer {
    captured: Arc<Mutex<Captured>>,
}

impl CaptureLayer {
    fn lock(&self) -> MutexGuard<'_, Captured> {
        self.captured.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.lock().events.clone()
    }

    /// Snapshot of closed spans in closing order.
    #[must_use]
    pub fn spans(&self) -> Vec<CapturedSpan> {
        self.lock().spans.clone()
    }

    /// First event whose message equals `message`.
    #[must_use]
    pub fn find_event(&self, message: &str) -> Option<CapturedEvent> {
        self.lock()
            .events
            .iter()
            .find(|event| event.message() == Some(message))
            .cloned()
    }

    /// First closed span named `name`.
    #[must_use]
    pub fn find_span(&self, name: &str) -> Option<CapturedSpan> {
        self.lock()
            .spans
            .iter()
            .find(|span| span.name == name)
            .cloned()
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut fields = Fields::new();
        attrs.record(&mut Collector(&mut fields));
        span.extensions_mut().insert(CapturedSpan {
            name: attrs.metadata().name().to_owned(),
            fields,
        });
    }

    fn on_record(&self, id: &Id, values: &::tracing::span::Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        if let Some(captured) = span.extensions_mut().get_mut::<CapturedSpan>() {
            values.record(&mut Collector(&mut captured.fields));
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::new();
        event.record(&mut Collector(&mut fields));
        let metadata = event.metadata();
        self.lock().events.push(CapturedEvent {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            fields,
        });
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let closed = span.extensions_mut().remove::<CapturedSpan>();
        if let Some(closed) = closed {
            self.lock().spans.push(closed);
        }
    }
}

struct Collector<'a>(&'a mut Fields);

impl Collector<'_> {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_owned(), value);
    }
}

impl Visit for Collector<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_owned());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }
}
