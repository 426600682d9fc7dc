use crate::store::node::Node;
use crate::store::sentinel::Sentinel;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Deepest level `resolve_deep` expands before emitting a depth sentinel.
pub const MAX_DEPTH: usize = 10;

/// Dereferences digit-string pointers against one immutable backing store.
///
/// A resolver lives for a single parse pass. It memoizes shallow lookups
/// (first reference wins) and tracks the references currently being
/// expanded so cyclic chains terminate with a sentinel instead of recursing
/// forever. Both pieces of state are private to the instance; use one
/// resolver per thread.
#[derive(Debug)]
pub struct Resolver<'s> {
    store: &'s [Value],
    cache: HashMap<usize, &'s Value>,
    resolving: HashSet<usize>,
    sentinels: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverStats {
    pub cached: usize,
    pub sentinels: usize,
}

impl<'s> Resolver<'s> {
    pub fn new(store: &'s [Value]) -> Self {
        Self {
            store,
            cache: HashMap::new(),
            resolving: HashSet::new(),
            sentinels: 0,
        }
    }

    pub fn store(&self) -> &'s [Value] {
        self.store
    }

    /// One level of dereferencing.
    ///
    /// A reference yields the store element it points at, or `None` when the
    /// index is out of bounds. Every other value is passed through as is.
    pub fn resolve_shallow<'v>(&mut self, value: &'v Value) -> Option<&'v Value>
    where
        's: 'v,
    {
        match Node::classify(value) {
            Node::Reference { index, .. } => self.lookup(index),
            _ => Some(value),
        }
    }

    /// Fully expand `value` and everything it transitively references.
    ///
    /// Never fails: an out-of-range reference becomes `null`, a cycle becomes
    /// `<circular_ref:N>` and anything nested deeper than [`MAX_DEPTH`]
    /// becomes `<max_depth_exceeded:D>`. The rest of the tree still resolves.
    pub fn resolve_deep(&mut self, value: &Value) -> Value {
        self.deep(Some(value), 0)
    }

    pub fn stats(&self) -> ResolverStats {
        ResolverStats {
            cached: self.cache.len(),
            sentinels: self.sentinels,
        }
    }

    fn lookup(&mut self, index: usize) -> Option<&'s Value> {
        if let Some(hit) = self.cache.get(&index).copied() {
            return Some(hit);
        }
        let found = self.store.get(index)?;
        self.cache.insert(index, found);
        Some(found)
    }

    fn deep(&mut self, value: Option<&Value>, depth: usize) -> Value {
        if depth > MAX_DEPTH {
            return self.sentinel(Sentinel::MaxDepthExceeded(depth));
        }
        let Some(value) = value else {
            return Value::Null;
        };

        match Node::classify(value) {
            Node::Reference { index, raw } => {
                if !self.resolving.insert(index) {
                    return self.sentinel(Sentinel::CircularRef(raw.to_string()));
                }
                let target = self.lookup(index);
                let resolved = self.deep(target, depth + 1);
                self.resolving.remove(&index);
                resolved
            }
            Node::Mapping(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), self.deep(Some(v), depth + 1)))
                    .collect(),
            ),
            Node::Sequence(items) => Value::Array(
                items
                    .iter()
                    .map(|v| self.deep(Some(v), depth + 1))
                    .collect(),
            ),
            Node::Literal(v) => v.clone(),
        }
    }

    fn sentinel(&mut self, sentinel: Sentinel) -> Value {
        debug!(%sentinel, "reference left unresolved");
        self.sentinels += 1;
        sentinel.into_value()
    }
}
