//! User notification seam
//!
//! Mutations report their outcome through [`Notifier`] instead of
//! rendering toasts directly; the binary wires in the tracing-backed
//! implementation, tests wire in the recording one.

use parking_lot::Mutex;

/// Outcome notifications emitted by mutations
pub trait Notifier: Send + Sync {
    /// A mutation succeeded.
    fn success(&self, message: &str);
    /// A mutation failed; the message is user-facing, not diagnostic.
    fn error(&self, message: &str);
}

/// Production notifier: emits notifications as log events
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "taskboard::notify", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "taskboard::notify", "{message}");
    }
}

/// One recorded notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Success toast text
    Success(String),
    /// Error toast text
    Error(String),
}

/// Test notifier that records every emission in order
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Fresh recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<Notification> {
        self.events.lock().clone()
    }

    /// True when at least one error notification was emitted.
    #[must_use]
    pub fn saw_error(&self) -> bool {
        self.events
            .lock()
            .iter()
            .any(|n| matches!(n, Notification::Error(_)))
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.events.lock().push(Notification::Success(message.to_owned()));
    }

    fn error(&self, message: &str) {
        self.events.lock().push(Notification::Error(message.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_emission_order() {
        let recorder = RecordingNotifier::new();
        recorder.success("created");
        recorder.error("failed");

        assert_eq!(
            recorder.events(),
            vec![
                Notification::Success("created".to_owned()),
                Notification::Error("failed".to_owned()),
            ]
        );
        assert!(recorder.saw_error());
    }
}
