//! Brook Bind - Stream-to-component bindings.
//!
//! This crate is the adapter between the push-based streams of
//! `brook-stream` and the declarative component model of `brook-host`.
//! The core primitive is [`component_from_stream`], which lifts a stream
//! transformation into a mountable component type; the binders layer
//! progressively friendlier entry points on top of it.
//!
//! # Core Concepts
//!
//! - [`component_from_stream`]: Prop stream in, node stream out, one shared pipeline per type
//! - [`bind_stream`] / [`Binder`]: Inject one prop stream into an ordinary render component
//! - [`bind`] / [`StreamMap`]: Fan named value streams into prop keys, with per-key defaults
//! - [`bind_dynamic`] / [`DynamicBinder`]: Derive the injected stream from the component's own props
//! - [`EventHandler`]: The write half of an ad-hoc event stream, for UI callbacks
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use brook_bind::bind_stream;
//! use brook_core::{Props, PropsRef};
//! use brook_host::{Mount, Node};
//! use brook_stream::Subject;
//!
//! let ticks: Subject<PropsRef> = Subject::new();
//! let binder = bind_stream(ticks.observe());
//! let component = binder.wrap(|props: &Props| {
//!     match props.get("tick") {
//!         Some(tick) => Node::text(format!("tick: {}", tick)),
//!         None => Node::Empty,
//!     }
//! });
//!
//! let mount = Mount::new(&component, Rc::new(Props::new()));
//! ticks.push(Rc::new(Props::new().with("tick", 1i64)));
//! assert_eq!(mount.rendered(), Node::Text("tick: 1".into()));
//! ```

#![no_std]

extern crate alloc;

pub mod binder;
pub mod bridge;
pub mod dynamic;
pub mod event;
pub mod named;

pub use binder::{bind_stream, Binder};
pub use bridge::{component_from_stream, NodeStream, PropsStream, StreamComponent};
pub use dynamic::{bind_dynamic, DynamicBinder};
pub use event::EventHandler;
pub use named::{bind, StreamMap};
