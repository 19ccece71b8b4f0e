//! Brook Stream - Push-based observable streams for Brook.
//!
//! This crate implements the stream abstraction the binding layer is built
//! on: producers hold explicit registries of observer callbacks, subscribing
//! appends a callback and returns a release capability, and all delivery is
//! synchronous on a single logical event loop.
//!
//! # Core Concepts
//!
//! - `Subject`: Multicast push stream; values pushed with no observers are dropped
//! - `ReplaySubject`: Remembers the most recent value and replays it to late observers
//! - `Observable`: Read-side handle with `map` / `start_with` combinators
//! - `combine_latest2` / `combine_latest`: Pairwise and N-way latest-value combination
//! - `Subscription`: Idempotent release capability, released on drop
//!
//! # Example
//!
//! ```rust
//! use brook_stream::{combine_latest2, Subject};
//!
//! let ticks: Subject<i64> = Subject::new();
//! let labels: Subject<i64> = Subject::new();
//!
//! let paired = combine_latest2(&ticks.observe(), &labels.observe(), |t, l| (*t, *l));
//! let sub = paired.subscribe(|pair| {
//!     let _ = pair;
//! });
//!
//! ticks.push(1);
//! labels.push(10); // first paired emission: (1, 10)
//! drop(sub);
//! ```

#![no_std]

extern crate alloc;

pub mod observable;
pub mod subject;
pub mod subscription;

pub use observable::{combine_latest, combine_latest2, Observable};
pub use subject::{ReplaySubject, Subject};
pub use subscription::{Observer, SubscriberId, Subscription};
