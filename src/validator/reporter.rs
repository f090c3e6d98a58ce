//! Message accumulation and delivery to the caller's sink

use crate::error::{Result, SpecError};
use crate::models::{Severity, ValidationMessage};

pub(crate) type MessageSink<'a> = Box<dyn FnMut(Severity, &str) + 'a>;

/// Records every warning and fatal of a run, forwards each one to the
/// registered sink as soon as it is produced, and turns a fatal into an
/// error when running violently.
pub struct Reporter<'a> {
    violent: bool,
    sink: Option<MessageSink<'a>>,
    messages: Vec<ValidationMessage>,
}

impl<'a> Reporter<'a> {
    pub fn new(violent: bool) -> Self {
        Self {
            violent,
            sink: None,
            messages: Vec::new(),
        }
    }

    pub(crate) fn set_violent(&mut self, violent: bool) {
        self.violent = violent;
    }

    pub(crate) fn is_violent(&self) -> bool {
        self.violent
    }

    pub(crate) fn set_sink(&mut self, sink: MessageSink<'a>) {
        self.sink = Some(sink);
    }

    pub(crate) fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.record(Severity::Warn, message.into());
    }

    /// Record a fatal problem. Returns `Err` only in violent mode, after the
    /// message has already been recorded and delivered.
    pub fn fatal(&mut self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        self.record(Severity::Fatal, message.clone());

        if self.violent {
            return Err(SpecError::InvalidSpecification(message));
        }
        Ok(())
    }

    fn record(&mut self, severity: Severity, message: String) {
        tracing::debug!("{}: {}", severity.label(), message);

        if let Some(sink) = self.sink.as_mut() {
            sink(severity, &message);
        }
        self.messages.push(ValidationMessage::new(severity, message));
    }

    pub fn messages(&self) -> &[ValidationMessage] {
        &self.messages
    }

    pub fn of_severity(&self, severity: Severity) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|m| m.severity == severity)
            .map(|m| m.message.as_str())
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }
}
