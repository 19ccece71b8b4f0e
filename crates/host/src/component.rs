//! Component abstractions: render functions, lifecycle hooks, and the
//! component-type factory contract.

use crate::mount::RenderSlot;
use crate::node::Node;
use alloc::boxed::Box;
use brook_core::{Props, PropsRef};

/// The "instantiate component with props" primitive: turns a prop snapshot
/// into render output.
///
/// Implemented for plain closures, so a function component is just
/// `|props: &Props| Node::text(...)`.
pub trait Render {
    fn render(&self, props: &Props) -> Node;
}

impl<F> Render for F
where
    F: Fn(&Props) -> Node,
{
    fn render(&self, props: &Props) -> Node {
        self(props)
    }
}

/// Lifecycle hooks of one mounted instance, driven by [`Mount`].
///
/// Hook order per instance: construction (via [`ComponentType::instantiate`]),
/// then `mounted` exactly once, then zero or more `props_changed`, then
/// `before_unmount` exactly once. Nothing is called after `before_unmount`.
///
/// [`Mount`]: crate::mount::Mount
pub trait Instance {
    /// Post-mount hook. The instance may acquire subscriptions here.
    fn mounted(&mut self) {}

    /// Props-changed hook. Receives the previous and current snapshots;
    /// the two may be reference-identical when the host re-delivers an
    /// unchanged snapshot.
    fn props_changed(&mut self, _prev: &PropsRef, _current: &PropsRef) {}

    /// Pre-unmount hook. The instance must release everything it acquired.
    fn before_unmount(&mut self) {}
}

/// A mountable component type: a factory producing instances.
///
/// `instantiate` receives the constructor-time props and the render-state
/// slot the instance writes its output into.
pub trait ComponentType {
    fn instantiate(&self, props: PropsRef, slot: RenderSlot) -> Box<dyn Instance>;
}
