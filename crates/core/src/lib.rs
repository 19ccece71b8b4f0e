//! Brook Core - Prop value model and error types for Brook.
//!
//! This crate provides the foundational types for the Brook stream-to-component
//! binding library:
//!
//! - `Value`: Runtime prop values (Null, Boolean, Int64, Float64, String)
//! - `Props`: An insertion-ordered keyed snapshot of prop values
//! - `Error`: Error types for stream and binding operations
//!
//! # Example
//!
//! ```rust
//! use brook_core::{Props, Value};
//!
//! // Build a prop snapshot
//! let external = Props::new().with("color", "blue");
//! let injected = Props::new().with("tick", 3i64);
//!
//! // Overlay merge: injected keys win on collision
//! let merged = external.merged(&injected);
//!
//! assert_eq!(merged.get("color"), Some(&Value::String("blue".into())));
//! assert_eq!(merged.get("tick"), Some(&Value::Int64(3)));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod props;
mod value;

pub use error::{Error, Result};
pub use props::{Props, PropsRef};
pub use value::Value;
