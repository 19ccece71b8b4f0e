//! Multicast subjects: externally pushed streams.
//!
//! A subject is a producer holding a registry of observer callbacks.
//! `Subject` delivers values only to observers registered at push time;
//! values pushed while nobody listens are dropped. `ReplaySubject` remembers
//! the single most recent value and immediately replays it to any observer
//! that joins later, then forwards live values — the relay the bridge uses
//! so a freshly mounted instance never misses the latest prop snapshot.

use crate::observable::Observable;
use crate::subscription::{Observer, SubscriberId, Subscription};
use alloc::rc::Rc;
use alloc::vec::Vec;
use brook_core::Error;
use core::cell::RefCell;
use hashbrown::HashMap;

/// Shared registry state for a multicast producer.
struct MulticastInner<T> {
    /// Registered observers keyed by subscriber ID.
    observers: HashMap<SubscriberId, Observer<T>>,
    /// Next subscriber ID to assign.
    next_id: SubscriberId,
    /// Terminal failure, if the subject has failed.
    failure: Option<Error>,
}

impl<T> MulticastInner<T> {
    fn new() -> Self {
        Self {
            observers: HashMap::new(),
            next_id: 1,
            failure: None,
        }
    }
}

/// Registers an observer and returns its release capability.
///
/// The release holds only a weak reference to the registry, so dropping the
/// producer makes outstanding subscriptions inert rather than keeping the
/// registry alive.
fn register<T: 'static>(inner: &Rc<RefCell<MulticastInner<T>>>, observer: Observer<T>) -> Subscription {
    let id = {
        let mut registry = inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.observers.insert(id, observer);
        id
    };

    let weak = Rc::downgrade(inner);
    Subscription::new(move || {
        if let Some(inner) = weak.upgrade() {
            inner.borrow_mut().observers.remove(&id);
        }
    })
}

/// Delivers a value to every observer registered right now.
///
/// The observer list is snapshotted before delivery so a callback that
/// subscribes or unsubscribes reentrantly cannot invalidate the iteration.
/// Observers added during delivery see only subsequent values.
fn broadcast<T>(inner: &Rc<RefCell<MulticastInner<T>>>, value: &T) {
    let observers: Vec<Observer<T>> = inner.borrow().observers.values().cloned().collect();
    for observer in &observers {
        observer.next(value);
    }
}

/// Marks the registry failed and delivers the error to every observer.
///
/// All observers are removed afterwards: a failed subject is terminal.
fn broadcast_failure<T>(inner: &Rc<RefCell<MulticastInner<T>>>, error: &Error) {
    let observers: Vec<Observer<T>> = {
        let mut registry = inner.borrow_mut();
        if registry.failure.is_some() {
            return;
        }
        registry.failure = Some(error.clone());
        registry.observers.drain().map(|(_, o)| o).collect()
    };
    for observer in &observers {
        observer.error(error);
    }
}

/// A multicast stream with an external push entry point.
///
/// Values pushed while no observer is registered are dropped, which is the
/// behavior wanted for ad-hoc event streams (a click that happens before
/// anyone listens simply never happened).
pub struct Subject<T> {
    inner: Rc<RefCell<MulticastInner<T>>>,
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Subject<T> {
    /// Creates a new subject with no observers.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(MulticastInner::new())),
        }
    }

    /// Pushes a value to all current observers.
    ///
    /// No-op after the subject has failed.
    pub fn push(&self, value: T) {
        if self.inner.borrow().failure.is_some() {
            return;
        }
        broadcast(&self.inner, &value);
    }

    /// Terminates the subject with a failure.
    ///
    /// Every current observer receives the error; observers joining later
    /// receive it immediately at subscribe time.
    pub fn fail(&self, error: Error) {
        broadcast_failure(&self.inner, &error);
    }

    /// Registers an observer. See [`Observable::subscribe_observer`].
    pub fn subscribe_observer(&self, observer: Observer<T>) -> Subscription {
        if let Some(failure) = self.inner.borrow().failure.clone() {
            observer.error(&failure);
            return Subscription::released();
        }
        register(&self.inner, observer)
    }

    /// Returns this subject's read side as an [`Observable`].
    pub fn observe(&self) -> Observable<T> {
        let subject = self.clone();
        Observable::new(move |observer| subject.subscribe_observer(observer))
    }

    /// Returns the number of registered observers.
    #[inline]
    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    /// Returns whether the subject has terminated with a failure.
    #[inline]
    pub fn has_failed(&self) -> bool {
        self.inner.borrow().failure.is_some()
    }
}

/// A multicast stream that replays its most recent value to new observers.
///
/// On subscribe, the latest value (if any was ever pushed) is delivered
/// synchronously before the observer is registered for live values.
pub struct ReplaySubject<T> {
    inner: Rc<RefCell<MulticastInner<T>>>,
    /// Most recent value pushed, replayed to late observers.
    latest: Rc<RefCell<Option<T>>>,
}

impl<T> Clone for ReplaySubject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            latest: self.latest.clone(),
        }
    }
}

impl<T: Clone + 'static> Default for ReplaySubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> ReplaySubject<T> {
    /// Creates a new replay subject with no remembered value.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(MulticastInner::new())),
            latest: Rc::new(RefCell::new(None)),
        }
    }

    /// Pushes a value: remembers it as the latest, then broadcasts it.
    ///
    /// The slot borrow is dropped before delivery so a callback may
    /// subscribe or push reentrantly.
    ///
    /// No-op after the subject has failed.
    pub fn push(&self, value: T) {
        if self.inner.borrow().failure.is_some() {
            return;
        }
        *self.latest.borrow_mut() = Some(value.clone());
        broadcast(&self.inner, &value);
    }

    /// Terminates the subject with a failure.
    pub fn fail(&self, error: Error) {
        broadcast_failure(&self.inner, &error);
    }

    /// Registers an observer, replaying the latest value first.
    pub fn subscribe_observer(&self, observer: Observer<T>) -> Subscription {
        if let Some(failure) = self.inner.borrow().failure.clone() {
            observer.error(&failure);
            return Subscription::released();
        }
        let replay = self.latest.borrow().clone();
        if let Some(value) = replay {
            observer.next(&value);
        }
        register(&self.inner, observer)
    }

    /// Returns this subject's read side as an [`Observable`].
    pub fn observe(&self) -> Observable<T> {
        let subject = self.clone();
        Observable::new(move |observer| subject.subscribe_observer(observer))
    }

    /// Returns the number of registered observers.
    #[inline]
    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    /// Returns whether a value has ever been pushed.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.latest.borrow().is_some()
    }

    /// Returns whether the subject has terminated with a failure.
    #[inline]
    pub fn has_failed(&self) -> bool {
        self.inner.borrow().failure.is_some()
    }
}
