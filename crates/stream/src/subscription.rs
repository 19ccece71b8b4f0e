//! Subscription handles and observer callbacks.
//!
//! This module provides the release capability returned by every subscribe
//! call, and the observer callback pair that subscriptions deliver into.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use brook_core::Error;

/// Unique identifier for a registered observer.
pub type SubscriberId = u64;

/// A pair of callbacks receiving stream emissions.
///
/// `next` receives value snapshots; `error` receives the stream's terminal
/// failure. Errors are never swallowed by operators: every combinator
/// forwards them unchanged to the downstream observer.
pub struct Observer<T> {
    next: Rc<dyn Fn(&T)>,
    error: Rc<dyn Fn(&Error)>,
}

impl<T> Clone for Observer<T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next.clone(),
            error: self.error.clone(),
        }
    }
}

impl<T> Observer<T> {
    /// Creates an observer with a value callback only.
    ///
    /// Terminal failures are dropped; use [`Observer::with_error`] when the
    /// subscriber has an error path of its own.
    pub fn new<F>(next: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        Self {
            next: Rc::new(next),
            error: Rc::new(|_| {}),
        }
    }

    /// Creates an observer with value and error callbacks.
    pub fn with_error<F, G>(next: F, error: G) -> Self
    where
        F: Fn(&T) + 'static,
        G: Fn(&Error) + 'static,
    {
        Self {
            next: Rc::new(next),
            error: Rc::new(error),
        }
    }

    /// Delivers a value snapshot.
    #[inline]
    pub fn next(&self, value: &T) {
        (*self.next)(value);
    }

    /// Delivers a terminal failure.
    #[inline]
    pub fn error(&self, error: &Error) {
        (*self.error)(error);
    }
}

/// Release capability for one stream subscription.
///
/// `unsubscribe` is idempotent and unconditional: calling it on an already
/// released subscription is a no-op, never an error. Dropping the handle
/// releases it as well, so a subscription can never outlive its owner.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a subscription whose release runs the given closure once.
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Creates an already-released subscription.
    pub fn released() -> Self {
        Self { release: None }
    }

    /// Returns whether this subscription still holds its release action.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Releases the subscription. Safe to call any number of times.
    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    /// Bundles several subscriptions into one that releases them all.
    pub fn join_all(subscriptions: Vec<Subscription>) -> Subscription {
        Subscription::new(move || {
            for mut subscription in subscriptions {
                subscription.unsubscribe();
            }
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
