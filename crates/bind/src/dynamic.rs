//! Prop injection derived from the host-delivered props.
//!
//! `bind_dynamic` is the dependent form of [`bind_stream`]: instead of a
//! fixed injected stream, the caller supplies a derivation from the
//! component's own prop stream. The derived snapshots merge over the
//! external ones the same way, injected side winning on key overlap.
//!
//! [`bind_stream`]: crate::binder::bind_stream

use crate::bridge::{component_from_stream, PropsStream, StreamComponent};
use alloc::rc::Rc;
use brook_core::{Props, PropsRef};
use brook_host::Render;
use brook_stream::combine_latest2;

/// Wraps render components with props derived from their own prop stream.
pub struct DynamicBinder {
    derive: Rc<dyn Fn(PropsStream) -> PropsStream>,
    default: Option<PropsRef>,
}

/// Creates a binder whose injected stream is derived from the external one.
///
/// The derivation runs once per wrapped component type, when the pipeline
/// is assembled.
pub fn bind_dynamic<F>(derive: F) -> DynamicBinder
where
    F: Fn(PropsStream) -> PropsStream + 'static,
{
    DynamicBinder {
        derive: Rc::new(derive),
        default: None,
    }
}

impl DynamicBinder {
    /// Seeds the derived side with a default snapshot.
    pub fn with_default(mut self, default: Props) -> Self {
        self.default = Some(Rc::new(default));
        self
    }

    /// Wraps a render component into a stream-backed component type.
    pub fn wrap<C>(&self, component: C) -> StreamComponent
    where
        C: Render + 'static,
    {
        let derive = self.derive.clone();
        let default = self.default.clone();
        let component = Rc::new(component);
        component_from_stream(move |props: PropsStream| {
            let mut injected = (*derive)(props.clone());
            if let Some(seed) = default {
                injected = injected.start_with(seed);
            }
            combine_latest2(&props, &injected, |external: &PropsRef, injected: &PropsRef| {
                external.merged(injected)
            })
            .map(move |merged: &Props| component.render(merged))
        })
    }
}
