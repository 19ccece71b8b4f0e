//! Mount driver and render-state slot.
//!
//! `Mount` stands in for the host framework's mount/update/unmount
//! machinery: it owns one instance of a component type, dispatches its
//! lifecycle hooks, and exposes the committed render output. `RenderSlot`
//! is the mutable render-state slot an instance writes into; replacing the
//! node counts as one re-render commit.

use crate::component::{ComponentType, Instance};
use crate::node::Node;
use alloc::boxed::Box;
use alloc::rc::Rc;
use brook_core::{Error, PropsRef};
use core::cell::RefCell;

/// Interior state of a render slot.
struct SlotInner {
    /// Latest committed render output.
    current: Node,
    /// Number of commits so far.
    commits: usize,
    /// First failure surfaced through the host error path, if any.
    failure: Option<Error>,
}

/// The mutable render-state slot of one mounted instance.
///
/// Cloning produces another handle to the same slot. The instance writes,
/// the host reads; replacing the node is what "re-render" means here.
pub struct RenderSlot {
    inner: Rc<RefCell<SlotInner>>,
}

impl Clone for RenderSlot {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl Default for RenderSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSlot {
    /// Creates a slot holding the empty render.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SlotInner {
                current: Node::Empty,
                commits: 0,
                failure: None,
            })),
        }
    }

    /// Replaces the committed node, counting one re-render.
    pub fn replace(&self, node: Node) {
        let mut inner = self.inner.borrow_mut();
        inner.current = node;
        inner.commits += 1;
    }

    /// Surfaces a failure through the host error path.
    ///
    /// The first failure wins; the committed node is left as-is so the host
    /// can decide what to show.
    pub fn fail(&self, error: Error) {
        let mut inner = self.inner.borrow_mut();
        if inner.failure.is_none() {
            inner.failure = Some(error);
        }
    }

    /// Returns the latest committed node.
    pub fn current(&self) -> Node {
        self.inner.borrow().current.clone()
    }

    /// Returns the number of commits so far.
    #[inline]
    pub fn commit_count(&self) -> usize {
        self.inner.borrow().commits
    }

    /// Returns the surfaced failure, if any.
    pub fn failure(&self) -> Option<Error> {
        self.inner.borrow().failure.clone()
    }
}

/// One mounted component instance, driven through its lifecycle.
///
/// Construction runs `instantiate` followed by the post-mount hook.
/// `unmount` (or drop) runs the pre-unmount hook exactly once; every path
/// out of a mounted state goes through it.
pub struct Mount {
    instance: Option<Box<dyn Instance>>,
    props: PropsRef,
    slot: RenderSlot,
}

impl Mount {
    /// Mounts `component` with the given constructor-time props.
    pub fn new(component: &dyn ComponentType, props: PropsRef) -> Self {
        let slot = RenderSlot::new();
        let mut instance = component.instantiate(props.clone(), slot.clone());
        instance.mounted();
        Self {
            instance: Some(instance),
            props,
            slot,
        }
    }

    /// Delivers a new prop snapshot from the parent.
    ///
    /// The props-changed hook always fires, receiving both the previous and
    /// the new snapshot; deciding whether anything actually changed is the
    /// instance's business.
    pub fn set_props(&mut self, props: PropsRef) {
        let prev = core::mem::replace(&mut self.props, props);
        if let Some(instance) = self.instance.as_mut() {
            instance.props_changed(&prev, &self.props);
        }
    }

    /// Returns the current props snapshot.
    pub fn props(&self) -> &PropsRef {
        &self.props
    }

    /// Returns the latest committed render output.
    pub fn rendered(&self) -> Node {
        self.slot.current()
    }

    /// Returns the number of render commits so far.
    #[inline]
    pub fn render_count(&self) -> usize {
        self.slot.commit_count()
    }

    /// Returns the failure surfaced through the host error path, if any.
    pub fn failure(&self) -> Option<Error> {
        self.slot.failure()
    }

    /// Returns whether the instance is still mounted.
    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.instance.is_some()
    }

    /// Unmounts the instance. Safe to call any number of times.
    pub fn unmount(&mut self) {
        if let Some(mut instance) = self.instance.take() {
            instance.before_unmount();
        }
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.unmount();
    }
}
