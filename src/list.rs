use crate::config::Config;
use crate::error::{ListError, Result};
use crate::kind::{Element, ElementKind, Payload, Value};
use crate::node::{Node, NodeHandle, NodeStore};
use std::fmt;

/// A doubly linked list whose elements all share one `ElementKind`.
///
/// Indices follow the Python convention: `0` is the head, `len - 1` the tail
/// and a negative index counts back from the end, so `-1` is the tail.
pub struct List {
    kind: ElementKind,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    nodes: NodeStore,
}

pub struct Iter<'a> {
    nodes: &'a NodeStore,
    head: Option<usize>,
    len: usize,
}

pub struct Nodes<'a> {
    nodes: &'a NodeStore,
    head: Option<usize>,
    len: usize,
}

impl List {
    fn push_front_node(&mut self, slot: usize) {
        let old = self.head;
        {
            let node = self.nodes.live_mut(slot);
            node.next = old;
            node.prev = None;
        }

        match old {
            None => self.tail = Some(slot),
            Some(head) => self.nodes.live_mut(head).prev = Some(slot),
        }

        self.head = Some(slot);
        self.len += 1;
    }

    fn push_back_node(&mut self, slot: usize) {
        let old = self.tail;
        {
            let node = self.nodes.live_mut(slot);
            node.next = None;
            node.prev = old;
        }

        match old {
            None => self.head = Some(slot),
            Some(tail) => self.nodes.live_mut(tail).next = Some(slot),
        }

        self.tail = Some(slot);
        self.len += 1;
    }

    // `at` is a live node that is not the head
    fn insert_before_node(&mut self, at: usize, slot: usize) {
        let prev = match self.nodes.live(at).prev {
            Some(p) => p,
            None => return self.push_front_node(slot),
        };

        {
            let node = self.nodes.live_mut(slot);
            node.prev = Some(prev);
            node.next = Some(at);
        }
        self.nodes.live_mut(prev).next = Some(slot);
        self.nodes.live_mut(at).prev = Some(slot);
        self.len += 1;
    }

    fn unlink_node(&mut self, slot: usize) {
        let (prev, next) = {
            let node = self.nodes.live(slot);
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.nodes.live_mut(p).next = next,
            None => self.head = next,
        }

        match next {
            Some(n) => self.nodes.live_mut(n).prev = prev,
            None => self.tail = prev,
        }

        self.len -= 1;
    }

    // walks from whichever end is closer
    fn index_off(&self, idx: usize) -> Option<usize> {
        if idx >= self.len {
            return None;
        }
        if idx < self.len - idx {
            let mut node = self.head?;
            for _ in 0..idx {
                node = self.nodes.live(node).next?;
            }
            Some(node)
        } else {
            let mut node = self.tail?;
            for _ in 0..self.len - 1 - idx {
                node = self.nodes.live(node).prev?;
            }
            Some(node)
        }
    }

    fn resolve_slot(&self, index: isize) -> Option<usize> {
        let index = if index < 0 {
            self.len as isize + index
        } else {
            index
        };
        if index < 0 {
            return None;
        }
        self.index_off(index as usize)
    }

    fn release_all<F>(&mut self, mut release: Option<F>) -> usize
        where F: FnMut(Payload) {
        let mut count = 0;
        let mut node = self.head.take();
        self.tail = None;
        self.len = 0;

        while let Some(slot) = node {
            node = self.nodes.live(slot).next;
            let value = self.nodes.release(slot);
            count += 1;
            if let (Some(f), Value::Custom(p)) = (release.as_mut(), value) {
                f(p);
            }
        }
        debug_assert_eq!(self.nodes.live_count(), 0);
        count
    }
}

impl List {
    pub fn new(kind: ElementKind) -> List {
        trace!("created {} list", kind);
        List {
            kind,
            head: None,
            tail: None,
            len: 0,
            nodes: NodeStore::new(),
        }
    }

    pub fn with_config(kind: ElementKind, config: &Config) -> Result<List> {
        let nodes = NodeStore::with_capacity(config.node_capacity)?;
        trace!("created {} list with room for {} nodes", kind, config.node_capacity);
        Ok(List {
            kind,
            head: None,
            tail: None,
            len: 0,
            nodes,
        })
    }

    /// Builds a list of `T::KIND` holding `iter` in order.
    pub fn from_elements<T, I>(iter: I) -> Result<List>
        where T: Element, I: IntoIterator<Item=T> {
        let mut list = List::new(T::KIND);
        for elt in iter {
            list.add(-1, elt)?;
        }
        Ok(list)
    }

    /// Copies every element into a new list with its own node store, so
    /// handles of `self` do not resolve in the copy.
    pub fn try_clone(&self) -> Result<List> {
        let config = Config::new().with_node_capacity(self.len);
        let mut list = List::with_config(self.kind, &config)?;
        for value in self.iter() {
            let slot = list.nodes.alloc(value.clone())?;
            list.push_back_node(slot);
        }
        Ok(list)
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            head: self.head,
            len: self.len,
        }
    }

    pub fn iter_nodes(&self) -> Nodes<'_> {
        Nodes {
            nodes: &self.nodes,
            head: self.head,
            len: self.len,
        }
    }

    /// Handle of the node at `index`, or `None` when the index does not name
    /// an element (including any index on an empty list).
    pub fn resolve_index(&self, index: isize) -> Option<NodeHandle> {
        self.resolve_slot(index).map(|slot| self.nodes.handle(slot))
    }

    pub fn get_node(&self, index: isize) -> Option<Node<'_>> {
        self.resolve_slot(index).map(|slot| Node::new(&self.nodes, slot))
    }

    pub fn get(&self, index: isize) -> Option<Value> {
        self.get_node(index).map(|node| node.value())
    }

    pub fn get_as<T: Element>(&self, index: isize) -> Option<T> {
        self.get_node(index).and_then(|node| T::from_value(node.value_ref()))
    }

    pub fn front(&self) -> Option<Value> {
        self.head.map(|slot| self.nodes.live(slot).value.clone())
    }

    pub fn back(&self) -> Option<Value> {
        self.tail.map(|slot| self.nodes.live(slot).value.clone())
    }

    pub fn node(&self, handle: NodeHandle) -> Option<Node<'_>> {
        self.nodes.resolve(handle).map(|slot| Node::new(&self.nodes, slot))
    }

    pub fn next(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.node(handle)?.next().map(|node| node.handle())
    }

    pub fn prev(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.node(handle)?.prev().map(|node| node.handle())
    }

    pub fn extract(&self, handle: NodeHandle) -> Option<Value> {
        self.node(handle).map(|node| node.value())
    }

    pub fn add<T: Element>(&mut self, index: isize, elt: T) -> Result<NodeHandle> {
        self.add_value(index, elt.into_value())
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// `0` pushes to the front. `-1` or anything at or past the current
    /// length appends. Other positive indices splice the node in front of the
    /// one currently at `index`. Other negative indices count back from the
    /// end the same way and clamp to the front once they run past it.
    pub fn add_value(&mut self, index: isize, value: Value) -> Result<NodeHandle> {
        if value.kind() != self.kind {
            return Err(ListError::KindMismatch {
                expected: self.kind,
                found: value.kind(),
            });
        }

        let len = self.len as isize;
        let slot = self.nodes.alloc(value)?;

        if self.len == 0 || index == 0 {
            self.push_front_node(slot);
        } else if index == -1 || index >= len {
            self.push_back_node(slot);
        } else {
            let at = if index > 0 { index } else { len + index };
            if at <= 0 {
                self.push_front_node(slot);
            } else {
                match self.resolve_slot(at) {
                    Some(target) => self.insert_before_node(target, slot),
                    None => self.push_back_node(slot),
                }
            }
        }

        Ok(self.nodes.handle(slot))
    }

    /// Removes the element at `index` and hands its value back. A `Custom`
    /// payload is returned, not dropped, so the caller decides its fate.
    pub fn remove(&mut self, index: isize) -> Result<Value> {
        let slot = match self.resolve_slot(index) {
            Some(slot) => slot,
            None => {
                return Err(ListError::IndexOutOfRange {
                    index,
                    len: self.len,
                })
            }
        };
        self.unlink_node(slot);
        Ok(self.nodes.release(slot))
    }

    /// Same as `remove`, but located by handle in O(1).
    pub fn detach(&mut self, handle: NodeHandle) -> Result<Value> {
        let slot = match self.nodes.resolve(handle) {
            Some(slot) => slot,
            None => {
                debug!("detach with a stale node handle {:?}", handle);
                return Err(ListError::StaleHandle);
            }
        };
        self.unlink_node(slot);
        Ok(self.nodes.release(slot))
    }

    /// Releases every node. Handles taken before the call stop resolving.
    pub fn clear(&mut self) {
        let n = self.release_all(None::<fn(Payload)>);
        if n > 0 {
            debug!("cleared {} nodes from {} list", n, self.kind);
        }
    }

    /// Like `clear`, but passes every `Custom` payload to `release` first.
    /// Lists of other kinds never call it.
    pub fn clear_with<F>(&mut self, release: F)
        where F: FnMut(Payload) {
        let n = self.release_all(Some(release));
        if n > 0 {
            debug!("cleared {} nodes from {} list", n, self.kind);
        }
    }

    pub fn destroy(mut self) {
        self.clear();
    }

    pub fn destroy_with<F>(mut self, release: F)
        where F: FnMut(Payload) {
        self.clear_with(release);
    }
}

/// Panics if the copy cannot be allocated; `List::try_clone` reports that as
/// `OutOfMemory` instead.
impl Clone for List {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(list) => list,
            Err(e) => panic!("cloning list: {}", e),
        }
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.len == other.len && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        if self.len == 0 {
            None
        } else {
            let nodes = self.nodes;
            self.head.map(|slot| {
                let node = nodes.live(slot);
                self.len -= 1;
                self.head = node.next;
                &node.value
            })
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Node<'a>> {
        if self.len == 0 {
            None
        } else {
            let nodes = self.nodes;
            self.head.map(|slot| {
                self.len -= 1;
                self.head = nodes.live(slot).next;
                Node::new(nodes, slot)
            })
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}
