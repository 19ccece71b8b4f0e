//! The stream-to-component bridge.
//!
//! `component_from_stream` turns a stream transformation into a mountable
//! component type. The mapper runs exactly once, when the type is created:
//! it receives the prop stream and returns the node stream. Instances of
//! the type feed their prop snapshots into a shared relay and mirror the
//! node stream into their render slot for as long as they are mounted.
//!
//! The relay replays its latest snapshot, so an instance mounted after the
//! stream has been active still renders from current data, and the node
//! pipeline built by the mapper is warm before the first instance appears.

use alloc::boxed::Box;
use alloc::rc::Rc;
use brook_core::PropsRef;
use brook_host::{ComponentType, Instance, Node, RenderSlot};
use brook_stream::{Observable, Observer, ReplaySubject, Subscription};

/// A stream of prop snapshots.
pub type PropsStream = Observable<PropsRef>;

/// A stream of render output.
pub type NodeStream = Observable<Node>;

/// A component type backed by a stream pipeline.
///
/// All instances share one relay and one node stream; the mapper that built
/// the node stream is never run again.
pub struct StreamComponent {
    relay: ReplaySubject<PropsRef>,
    nodes: NodeStream,
}

/// Builds a component type from a prop-stream-to-node-stream mapper.
///
/// The mapper is consumed here: it runs once per call, not once per
/// instance.
pub fn component_from_stream<F>(mapper: F) -> StreamComponent
where
    F: FnOnce(PropsStream) -> NodeStream,
{
    let relay: ReplaySubject<PropsRef> = ReplaySubject::new();
    let nodes = mapper(relay.observe());
    StreamComponent { relay, nodes }
}

impl ComponentType for StreamComponent {
    fn instantiate(&self, props: PropsRef, slot: RenderSlot) -> Box<dyn Instance> {
        // Constructor props enter the relay before the instance subscribes;
        // replay hands them back at mount so the first render is synchronous.
        self.relay.push(props);
        Box::new(StreamInstance {
            relay: self.relay.clone(),
            nodes: self.nodes.clone(),
            slot,
            subscription: None,
        })
    }
}

struct StreamInstance {
    relay: ReplaySubject<PropsRef>,
    nodes: NodeStream,
    slot: RenderSlot,
    subscription: Option<Subscription>,
}

impl Instance for StreamInstance {
    fn mounted(&mut self) {
        let render_slot = self.slot.clone();
        let error_slot = self.slot.clone();
        self.subscription = Some(self.nodes.subscribe_observer(Observer::with_error(
            move |node: &Node| render_slot.replace(node.clone()),
            move |error| error_slot.fail(error.clone()),
        )));
    }

    fn props_changed(&mut self, prev: &PropsRef, current: &PropsRef) {
        // Reference identity gates the push: the same snapshot delivered
        // twice must not retrigger the pipeline.
        if !Rc::ptr_eq(prev, current) {
            self.relay.push(current.clone());
        }
    }

    fn before_unmount(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}
