//! Single-stream prop injection.
//!
//! A `Binder` holds one stream of prop snapshots and wraps ordinary render
//! components into stream-backed component types. The wrapped component
//! re-renders whenever either the host-delivered props or the injected
//! stream produces a value; on key overlap the injected value wins.

use crate::bridge::{component_from_stream, PropsStream, StreamComponent};
use alloc::rc::Rc;
use brook_core::{Props, PropsRef};
use brook_host::Render;
use brook_stream::combine_latest2;

/// Wraps render components with props injected from a stream.
pub struct Binder {
    injected: PropsStream,
}

/// Creates a binder over an injected prop stream.
pub fn bind_stream(injected: PropsStream) -> Binder {
    Binder { injected }
}

impl Binder {
    /// Seeds the injected side with a default snapshot, emitted to each
    /// wrapped instance before the stream's own values.
    ///
    /// Without a seed the wrapped component renders only once the stream
    /// has produced at least one value.
    pub fn with_default(self, default: Props) -> Self {
        Self {
            injected: self.injected.start_with(Rc::new(default)),
        }
    }

    /// Wraps a render component into a stream-backed component type.
    ///
    /// Each call builds an independent pipeline; wrapping the same binder
    /// twice yields two component types sharing the injected stream.
    pub fn wrap<C>(&self, component: C) -> StreamComponent
    where
        C: Render + 'static,
    {
        let injected = self.injected.clone();
        let component = Rc::new(component);
        component_from_stream(move |props| {
            combine_latest2(&props, &injected, |external: &PropsRef, injected: &PropsRef| {
                external.merged(injected)
            })
            .map(move |merged: &Props| component.render(merged))
        })
    }
}
