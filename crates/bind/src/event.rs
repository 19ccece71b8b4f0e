//! Event handlers: callable producers paired with a stream.
//!
//! An `EventHandler` is the write half of an ad-hoc event stream. UI code
//! calls `emit` from callbacks; binding code reads the paired stream. There
//! is no replay: an event fired while nothing observes the stream is gone.

use brook_stream::{Observable, Subject};

/// A callable event source with a readable stream side.
///
/// Clones share the underlying stream.
pub struct EventHandler<T> {
    subject: Subject<T>,
}

impl<T> Clone for EventHandler<T> {
    fn clone(&self) -> Self {
        Self {
            subject: self.subject.clone(),
        }
    }
}

impl<T: 'static> Default for EventHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> EventHandler<T> {
    /// Creates a handler with no observers.
    pub fn new() -> Self {
        Self {
            subject: Subject::new(),
        }
    }

    /// Fires an event to all current observers of the stream.
    pub fn emit(&self, value: T) {
        self.subject.push(value);
    }

    /// Returns the read side of the event stream.
    pub fn stream(&self) -> Observable<T> {
        self.subject.observe()
    }
}
