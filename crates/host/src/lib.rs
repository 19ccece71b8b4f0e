//! Brook Host - Minimal host UI component model for Brook.
//!
//! This crate provides the host-framework surface the binding layer plugs
//! into: a renderable node type, the instantiate-with-props primitive, the
//! lifecycle hooks of a mounted instance, and a mount driver that dispatches
//! them.
//!
//! # Core Concepts
//!
//! - `Node`: One materialized render output snapshot
//! - `Render`: Props-to-node function, implemented for closures
//! - `Instance` / `ComponentType`: Lifecycle hooks and the factory contract
//! - `RenderSlot`: The render-state slot; replacing its node is a re-render
//! - `Mount`: Drives mount, prop updates, and exactly-once unmount
//!
//! # Example
//!
//! ```rust
//! use brook_core::Props;
//! use brook_host::{Node, Render};
//!
//! let ticker = |props: &Props| match props.get("tick") {
//!     Some(tick) => Node::text(format!("tick: {}", tick)),
//!     None => Node::Empty,
//! };
//! assert_eq!(ticker.render(&Props::new().with("tick", 1i64)), Node::text("tick: 1"));
//! ```

#![no_std]

extern crate alloc;

pub mod component;
pub mod mount;
pub mod node;

pub use component::{ComponentType, Instance, Render};
pub use mount::{Mount, RenderSlot};
pub use node::Node;
