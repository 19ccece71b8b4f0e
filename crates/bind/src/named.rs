//! Named fan-in: one prop key per stream.
//!
//! `bind` takes a map from prop names to value streams and produces a
//! binder whose injected snapshot carries the latest value of every stream
//! under its own key. The snapshot emits once all streams have produced a
//! value; defaults fill a stream's slot by key so sparse feeds still render.

use crate::binder::{bind_stream, Binder};
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use brook_core::{Props, Value};
use brook_stream::{combine_latest, Observable};

/// An ordered map from prop names to value streams.
///
/// Insertion order becomes key order in the emitted snapshots.
#[derive(Default)]
pub struct StreamMap {
    entries: Vec<(String, Observable<Value>)>,
}

impl StreamMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, stream: Observable<Value>) -> Self {
        self.insert(name, stream);
        self
    }

    /// Adds a stream under `name`. A repeated name keeps both streams live;
    /// the later one's value wins in the snapshot.
    pub fn insert(&mut self, name: impl Into<String>, stream: Observable<Value>) {
        self.entries.push((name.into(), stream));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a binder from named value streams.
///
/// Each stream whose name appears in `defaults` is seeded with the default
/// value, so it contributes immediately. Streams without a default hold the
/// snapshot back until they emit. With an empty map the injected side never
/// emits and wrapped components never render from it.
pub fn bind(streams: StreamMap, defaults: Option<&Props>) -> Binder {
    let mut names = Vec::with_capacity(streams.entries.len());
    let mut sources = Vec::with_capacity(streams.entries.len());

    for (name, stream) in streams.entries {
        let seeded = match defaults.and_then(|d| d.get(&name)) {
            Some(value) => stream.start_with(value.clone()),
            None => stream,
        };
        names.push(name);
        sources.push(seeded);
    }

    let injected = combine_latest(sources).map(move |values: &Vec<Value>| {
        let props: Props = names
            .iter()
            .cloned()
            .zip(values.iter().cloned())
            .collect();
        Rc::new(props)
    });

    bind_stream(injected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;
    use brook_host::{Mount, Node};
    use brook_stream::Subject;

    fn pair_label(props: &Props) -> Node {
        let a = props.get("a").and_then(|v| v.as_i64()).unwrap_or(-1);
        let b = props.get("b").and_then(|v| v.as_str()).unwrap_or("?");
        Node::text(format!("a={} b={}", a, b))
    }

    #[test]
    fn test_each_stream_feeds_its_own_key() {
        let counts: Subject<Value> = Subject::new();
        let labels: Subject<Value> = Subject::new();
        let binder = bind(
            StreamMap::new()
                .with("a", counts.observe())
                .with("b", labels.observe()),
            None,
        );
        let component = binder.wrap(pair_label);
        let mount = Mount::new(&component, Rc::new(Props::new()));

        counts.push(Value::Int64(1));
        assert_eq!(mount.render_count(), 0);

        labels.push(Value::from("x"));
        assert_eq!(mount.rendered(), Node::Text("a=1 b=x".into()));

        counts.push(Value::Int64(2));
        assert_eq!(mount.rendered(), Node::Text("a=2 b=x".into()));
    }

    #[test]
    fn test_defaults_match_by_key_not_position() {
        let counts: Subject<Value> = Subject::new();
        let labels: Subject<Value> = Subject::new();
        // Defaults list "b" only; declaration order of the streams must not
        // matter for which slot the default fills.
        let binder = bind(
            StreamMap::new()
                .with("a", counts.observe())
                .with("b", labels.observe()),
            Some(&Props::new().with("b", "fallback")),
        );
        let component = binder.wrap(pair_label);
        let mount = Mount::new(&component, Rc::new(Props::new()));

        counts.push(Value::Int64(3));
        assert_eq!(mount.rendered(), Node::Text("a=3 b=fallback".into()));

        labels.push(Value::from("live"));
        assert_eq!(mount.rendered(), Node::Text("a=3 b=live".into()));
    }

    #[test]
    fn test_unrelated_default_keys_are_ignored() {
        let counts: Subject<Value> = Subject::new();
        let binder = bind(
            StreamMap::new().with("a", counts.observe()),
            Some(&Props::new().with("zzz", 0i64)),
        );
        let component = binder.wrap(pair_label);
        let mount = Mount::new(&component, Rc::new(Props::new()));

        // No default for "a", so nothing emits yet.
        assert_eq!(mount.render_count(), 0);

        counts.push(Value::Int64(5));
        assert_eq!(mount.rendered(), Node::Text("a=5 b=?".into()));
    }

    #[test]
    fn test_snapshot_preserves_declaration_order() {
        let first: Subject<Value> = Subject::new();
        let second: Subject<Value> = Subject::new();
        let binder = bind(
            StreamMap::new()
                .with("second", second.observe())
                .with("first", first.observe()),
            None,
        );

        let seen = Rc::new(core::cell::RefCell::new(vec![]));
        let seen_clone = seen.clone();
        let component = binder.wrap(move |props: &Props| {
            seen_clone
                .borrow_mut()
                .push(props.keys().map(String::from).collect::<Vec<String>>());
            Node::Empty
        });
        let _mount = Mount::new(&component, Rc::new(Props::new()));

        first.push(Value::Int64(1));
        second.push(Value::Int64(2));

        assert_eq!(
            *seen.borrow(),
            vec![vec![String::from("second"), String::from("first")]]
        );
    }

    #[test]
    fn test_empty_map_never_renders() {
        let binder = bind(StreamMap::new(), None);
        let mut mount = Mount::new(&binder.wrap(pair_label), Rc::new(Props::new()));

        mount.set_props(Rc::new(Props::new().with("a", 1i64)));
        assert_eq!(mount.render_count(), 0);
    }
}
