//! # Recording Event Sink
//!
//! Event sink that records every queued event for inspection. Production
//! deployments queue events through the platform's transaction event API.

use crate::errors::EventSinkError;
use crate::ports::outbound::EventSink;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// A single event captured by the recorder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedEvent {
    /// Event name as subscribers see it.
    pub name: String,
    /// Encoded payload.
    pub payload: Vec<u8>,
}

/// Event sink recording everything it accepts.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: RwLock<Vec<RecordedEvent>>,
    fail_next_emit: AtomicBool,
}

impl RecordingEventSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `emit` call fail without recording.
    pub fn fail_next_emit(&self) {
        self.fail_next_emit.store(true, Ordering::SeqCst);
    }

    /// Everything recorded so far, in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.read().unwrap().clone()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().unwrap().len()
    }

    /// True if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().unwrap().is_empty()
    }
}

#[async_trait]
impl EventSink for RecordingEventSink {
    async fn emit(&self, name: &str, payload: Vec<u8>) -> Result<(), EventSinkError> {
        if self.fail_next_emit.swap(false, Ordering::SeqCst) {
            return Err(EventSinkError::Rejected(
                "injected emit failure".to_string(),
            ));
        }
        self.events.write().unwrap().push(RecordedEvent {
            name: name.to_string(),
            payload,
        });
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
