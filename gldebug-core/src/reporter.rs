use std::fmt;

use crate::bounded;

/// Receives formatted error messages.
///
/// Any `Fn(&str)` closure is a sink. Dispatch is synchronous, on the thread
/// that runs the check.
pub trait Sink {
    /// Handles one message.
    fn notify(&self, message: &str);
}

impl<F: Fn(&str)> Sink for F {
    fn notify(&self, message: &str) {
        self(message);
    }
}

/// Sink forwarding every message to `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn notify(&self, message: &str) {
        tracing::error!(target: "gldebug", "{message}");
    }
}

/// Holds at most one [`Sink`] and hands messages to it.
#[derive(Default)]
pub struct Reporter {
    sink: Option<Box<dyn Sink>>,
}

impl Reporter {
    /// Creates a reporter without a sink; reports are dropped until one is set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reporter dispatching to `sink`.
    pub fn with_sink(sink: impl Sink + 'static) -> Self {
        Self { sink: Some(Box::new(sink)) }
    }

    /// Registers `sink`, dropping whichever sink was registered before.
    pub fn set_callback(&mut self, sink: impl Sink + 'static) {
        self.set_sink(Some(Box::new(sink)));
    }

    /// Replaces the sink; `None` disables reporting.
    pub fn set_sink(&mut self, sink: Option<Box<dyn Sink>>) {
        tracing::debug!(
            replaced = self.sink.is_some(),
            enabled = sink.is_some(),
            "gldebug sink updated"
        );
        self.sink = sink;
    }

    /// Removes the sink.
    pub fn clear(&mut self) {
        self.set_sink(None);
    }

    /// Returns true if a sink is registered.
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Sends `message` to the sink, bounded to [`MESSAGE_CAPACITY`](crate::MESSAGE_CAPACITY).
    /// Without a sink this does nothing.
    pub fn report(&self, message: impl Into<String>) {
        let Some(sink) = &self.sink else {
            return;
        };

        let message = bounded::message(message.into());
        sink.notify(&message);
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
