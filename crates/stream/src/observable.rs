//! Observable stream handles and combinators.
//!
//! An `Observable<T>` is the read side of a stream: a subscribe function
//! that wires an observer to some producer and returns the release
//! capability. Combinators build derived observables whose subscribe
//! functions subscribe upstream, transform emissions, and forward terminal
//! failures unchanged.
//!
//! All delivery is synchronous on the single event loop: an emission from a
//! source runs the whole downstream chain before the push call returns, so
//! merged output order always matches the interleaving of the inputs.

use crate::subscription::{Observer, Subscription};
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

/// The read side of a push-based stream.
///
/// Cloning an observable clones the handle, not the stream: both handles
/// subscribe to the same producer.
pub struct Observable<T> {
    on_subscribe: Rc<dyn Fn(Observer<T>) -> Subscription>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            on_subscribe: self.on_subscribe.clone(),
        }
    }
}

impl<T: 'static> Observable<T> {
    /// Creates an observable from a subscribe function.
    pub fn new<F>(on_subscribe: F) -> Self
    where
        F: Fn(Observer<T>) -> Subscription + 'static,
    {
        Self {
            on_subscribe: Rc::new(on_subscribe),
        }
    }

    /// Subscribes with a value callback only.
    pub fn subscribe<F>(&self, next: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        self.subscribe_observer(Observer::new(next))
    }

    /// Subscribes with a full observer (value + error callbacks).
    pub fn subscribe_observer(&self, observer: Observer<T>) -> Subscription {
        (*self.on_subscribe)(observer)
    }

    /// Derives a stream that transforms every value through `f`.
    ///
    /// Failures pass through untransformed.
    pub fn map<U, F>(&self, f: F) -> Observable<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        let source = self.clone();
        let f = Rc::new(f);
        Observable::new(move |observer: Observer<U>| {
            let f = f.clone();
            let error_target = observer.clone();
            source.subscribe_observer(Observer::with_error(
                move |value: &T| observer.next(&(*f)(value)),
                move |error| error_target.error(error),
            ))
        })
    }

    /// Derives a stream that emits `seed` to each subscriber before
    /// forwarding the source's emissions.
    pub fn start_with(&self, seed: T) -> Observable<T> {
        let source = self.clone();
        Observable::new(move |observer| {
            observer.next(&seed);
            source.subscribe_observer(observer)
        })
    }
}

/// Combines the latest values of two streams.
///
/// Emits once both sources have produced at least one value, then again on
/// every emission from either source. Failures from either source are
/// forwarded to the subscriber.
pub fn combine_latest2<A, B, O, F>(
    left: &Observable<A>,
    right: &Observable<B>,
    combine: F,
) -> Observable<O>
where
    A: Clone + 'static,
    B: Clone + 'static,
    O: 'static,
    F: Fn(&A, &B) -> O + 'static,
{
    let left = left.clone();
    let right = right.clone();
    let combine = Rc::new(combine);

    Observable::new(move |observer: Observer<O>| {
        let latest: Rc<RefCell<(Option<A>, Option<B>)>> = Rc::new(RefCell::new((None, None)));

        let emit = {
            let latest = latest.clone();
            let combine = combine.clone();
            let observer = observer.clone();
            move || {
                // Compute under the borrow, deliver after releasing it.
                let combined = {
                    let pair = latest.borrow();
                    match (&pair.0, &pair.1) {
                        (Some(a), Some(b)) => Some((*combine)(a, b)),
                        _ => None,
                    }
                };
                if let Some(value) = combined {
                    observer.next(&value);
                }
            }
        };

        let left_sub = {
            let latest = latest.clone();
            let emit = emit.clone();
            let error_target = observer.clone();
            left.subscribe_observer(Observer::with_error(
                move |value: &A| {
                    latest.borrow_mut().0 = Some(value.clone());
                    emit();
                },
                move |error| error_target.error(error),
            ))
        };

        let right_sub = {
            let error_target = observer.clone();
            right.subscribe_observer(Observer::with_error(
                move |value: &B| {
                    latest.borrow_mut().1 = Some(value.clone());
                    emit();
                },
                move |error| error_target.error(error),
            ))
        };

        Subscription::join_all(alloc::vec![left_sub, right_sub])
    })
}

/// Combines the latest values of N homogeneous streams, preserving input
/// order in the emitted vector.
///
/// Emits once every source has produced at least one value. With zero
/// sources the result never emits.
pub fn combine_latest<T>(sources: Vec<Observable<T>>) -> Observable<Vec<T>>
where
    T: Clone + 'static,
{
    Observable::new(move |observer: Observer<Vec<T>>| {
        let len = sources.len();
        let latest: Rc<RefCell<Vec<Option<T>>>> =
            Rc::new(RefCell::new((0..len).map(|_| None).collect()));

        let emit = {
            let latest = latest.clone();
            let observer = observer.clone();
            move || {
                let snapshot = {
                    let slots = latest.borrow();
                    if slots.iter().any(|slot| slot.is_none()) {
                        None
                    } else {
                        Some(
                            slots
                                .iter()
                                .filter_map(|slot| slot.as_ref().cloned())
                                .collect::<Vec<T>>(),
                        )
                    }
                };
                if let Some(values) = snapshot {
                    observer.next(&values);
                }
            }
        };

        let mut subscriptions = Vec::with_capacity(len);
        for (index, source) in sources.iter().enumerate() {
            let latest = latest.clone();
            let emit = emit.clone();
            let error_target = observer.clone();
            subscriptions.push(source.subscribe_observer(Observer::with_error(
                move |value: &T| {
                    latest.borrow_mut()[index] = Some(value.clone());
                    emit();
                },
                move |error| error_target.error(error),
            )));
        }

        Subscription::join_all(subscriptions)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::{ReplaySubject, Subject};
    use alloc::vec;
    use brook_core::Error;

    #[test]
    fn test_map_transforms_values() {
        let subject: Subject<i64> = Subject::new();
        let doubled = subject.observe().map(|v| v * 2);

        let received = Rc::new(RefCell::new(vec![]));
        let rc = received.clone();
        let _sub = doubled.subscribe(move |v: &i64| rc.borrow_mut().push(*v));

        subject.push(1);
        subject.push(3);

        assert_eq!(*received.borrow(), vec![2, 6]);
    }

    #[test]
    fn test_map_forwards_errors() {
        let subject: Subject<i64> = Subject::new();
        let mapped = subject.observe().map(|v| v + 1);

        let errors = Rc::new(RefCell::new(0));
        let ec = errors.clone();
        let _sub = mapped.subscribe_observer(Observer::with_error(
            |_: &i64| {},
            move |_| *ec.borrow_mut() += 1,
        ));

        subject.fail(Error::upstream("boom"));
        assert_eq!(*errors.borrow(), 1);
    }

    #[test]
    fn test_start_with_emits_seed_first() {
        let subject: Subject<i64> = Subject::new();
        let seeded = subject.observe().start_with(0);

        let received = Rc::new(RefCell::new(vec![]));
        let rc = received.clone();
        let _sub = seeded.subscribe(move |v: &i64| rc.borrow_mut().push(*v));

        assert_eq!(*received.borrow(), vec![0]);

        subject.push(1);
        assert_eq!(*received.borrow(), vec![0, 1]);
    }

    #[test]
    fn test_start_with_per_subscriber() {
        let subject: Subject<i64> = Subject::new();
        let seeded = subject.observe().start_with(7);

        let count_a = Rc::new(RefCell::new(0));
        let count_b = Rc::new(RefCell::new(0));
        let ca = count_a.clone();
        let cb = count_b.clone();

        let _sub_a = seeded.subscribe(move |_| *ca.borrow_mut() += 1);
        let _sub_b = seeded.subscribe(move |_| *cb.borrow_mut() += 1);

        // Each subscriber gets its own seed emission.
        assert_eq!(*count_a.borrow(), 1);
        assert_eq!(*count_b.borrow(), 1);
    }

    #[test]
    fn test_combine_latest2_waits_for_both() {
        let left: Subject<i64> = Subject::new();
        let right: Subject<i64> = Subject::new();
        let combined = combine_latest2(&left.observe(), &right.observe(), |a, b| (*a, *b));

        let received = Rc::new(RefCell::new(vec![]));
        let rc = received.clone();
        let _sub = combined.subscribe(move |v: &(i64, i64)| rc.borrow_mut().push(*v));

        left.push(1);
        assert!(received.borrow().is_empty());

        right.push(10);
        assert_eq!(*received.borrow(), vec![(1, 10)]);

        // Either side triggers a fresh pairing afterwards.
        left.push(2);
        right.push(20);
        assert_eq!(*received.borrow(), vec![(1, 10), (2, 10), (2, 20)]);
    }

    #[test]
    fn test_combine_latest2_forwards_errors() {
        let left: Subject<i64> = Subject::new();
        let right: Subject<i64> = Subject::new();
        let combined = combine_latest2(&left.observe(), &right.observe(), |a, b| a + b);

        let errors = Rc::new(RefCell::new(0));
        let ec = errors.clone();
        let _sub = combined.subscribe_observer(Observer::with_error(
            |_: &i64| {},
            move |_| *ec.borrow_mut() += 1,
        ));

        right.fail(Error::upstream("right side died"));
        assert_eq!(*errors.borrow(), 1);
    }

    #[test]
    fn test_combine_latest2_unsubscribe_releases_both() {
        let left: Subject<i64> = Subject::new();
        let right: Subject<i64> = Subject::new();
        let combined = combine_latest2(&left.observe(), &right.observe(), |a, b| a + b);

        let mut sub = combined.subscribe(|_| {});
        assert_eq!(left.observer_count(), 1);
        assert_eq!(right.observer_count(), 1);

        sub.unsubscribe();
        assert_eq!(left.observer_count(), 0);
        assert_eq!(right.observer_count(), 0);
    }

    #[test]
    fn test_combine_latest2_with_replay_source() {
        let relay: ReplaySubject<i64> = ReplaySubject::new();
        let other: Subject<i64> = Subject::new();
        relay.push(5);

        let combined = combine_latest2(&relay.observe(), &other.observe(), |a, b| (*a, *b));

        let received = Rc::new(RefCell::new(vec![]));
        let rc = received.clone();
        let _sub = combined.subscribe(move |v: &(i64, i64)| rc.borrow_mut().push(*v));

        // The replayed value fills the left slot at subscribe time.
        other.push(1);
        assert_eq!(*received.borrow(), vec![(5, 1)]);
    }

    #[test]
    fn test_combine_latest_vec_order() {
        let a: Subject<i64> = Subject::new();
        let b: Subject<i64> = Subject::new();
        let c: Subject<i64> = Subject::new();
        let combined = combine_latest(vec![a.observe(), b.observe(), c.observe()]);

        let received = Rc::new(RefCell::new(vec![]));
        let rc = received.clone();
        let _sub = combined.subscribe(move |v: &Vec<i64>| rc.borrow_mut().push(v.clone()));

        // Emit out of declaration order: slots still line up with inputs.
        c.push(3);
        a.push(1);
        assert!(received.borrow().is_empty());
        b.push(2);

        assert_eq!(*received.borrow(), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_combine_latest_vec_reemits_on_any_source() {
        let a: Subject<i64> = Subject::new();
        let b: Subject<i64> = Subject::new();
        let combined = combine_latest(vec![a.observe(), b.observe()]);

        let received = Rc::new(RefCell::new(vec![]));
        let rc = received.clone();
        let _sub = combined.subscribe(move |v: &Vec<i64>| rc.borrow_mut().push(v.clone()));

        a.push(1);
        b.push(2);
        a.push(3);

        assert_eq!(*received.borrow(), vec![vec![1, 2], vec![3, 2]]);
    }

    #[test]
    fn test_combine_latest_empty_never_emits() {
        let combined: Observable<Vec<i64>> = combine_latest(vec![]);

        let count = Rc::new(RefCell::new(0));
        let count_clone = count.clone();
        let _sub = combined.subscribe(move |_| *count_clone.borrow_mut() += 1);

        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_operator_chain_releases_upstream() {
        let subject: Subject<i64> = Subject::new();
        let chained = subject.observe().map(|v| v + 1).start_with(0).map(|v| v * 2);

        let mut sub = chained.subscribe(|_| {});
        assert_eq!(subject.observer_count(), 1);

        sub.unsubscribe();
        assert_eq!(subject.observer_count(), 0);
    }
}
