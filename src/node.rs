//! Node store: the arena every list keeps its nodes in.
//!
//! Nodes are addressed by slot index. A slot that is released bumps its
//! generation, so a `NodeHandle` taken before the release no longer resolves.
//! Handles also carry the id of the store that issued them, which stands in
//! for the node's back-reference to its owning list.

use crate::error::{ListError, Result};
use crate::kind::Value;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering::Relaxed};

static NEXT_STORE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct NodeHandle {
    owner: u64,
    slot: usize,
    generation: u32,
}

pub(crate) struct NodeEntry {
    pub value: Value,
    pub next: Option<usize>,
    pub prev: Option<usize>,
}

struct Slot {
    generation: u32,
    entry: Option<NodeEntry>,
}

pub(crate) struct NodeStore {
    id: u64,
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl NodeStore {
    pub fn with_capacity(capacity: usize) -> Result<NodeStore> {
        let mut slots = Vec::new();
        let mut free = Vec::new();
        slots
            .try_reserve(capacity)
            .map_err(|_| ListError::OutOfMemory)?;
        free.try_reserve(capacity)
            .map_err(|_| ListError::OutOfMemory)?;
        Ok(NodeStore {
            id: NEXT_STORE_ID.fetch_add(1, Relaxed),
            slots,
            free,
        })
    }

    pub fn new() -> NodeStore {
        NodeStore {
            id: NEXT_STORE_ID.fetch_add(1, Relaxed),
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `value` in an unlinked node. Either a slot is handed out or
    /// nothing changes.
    pub fn alloc(&mut self, value: Value) -> Result<usize> {
        let entry = NodeEntry {
            value,
            next: None,
            prev: None,
        };

        if let Some(slot) = self.free.pop() {
            self.slots[slot].entry = Some(entry);
            return Ok(slot);
        }

        // `free` must be able to take every slot back without allocating
        let want = self.slots.len() + 1;
        self.slots
            .try_reserve(1)
            .map_err(|_| ListError::OutOfMemory)?;
        self.free
            .try_reserve(want - self.free.len())
            .map_err(|_| ListError::OutOfMemory)?;

        self.slots.push(Slot {
            generation: 0,
            entry: Some(entry),
        });
        Ok(self.slots.len() - 1)
    }

    pub fn release(&mut self, slot: usize) -> Value {
        let s = &mut self.slots[slot];
        let entry = match s.entry.take() {
            Some(e) => e,
            None => panic!("releasing vacant node slot {}", slot),
        };
        s.generation = s.generation.wrapping_add(1);
        self.free.push(slot);
        entry.value
    }

    pub fn handle(&self, slot: usize) -> NodeHandle {
        NodeHandle {
            owner: self.id,
            slot,
            generation: self.slots[slot].generation,
        }
    }

    /// Maps a handle back to its slot if the node it named is still live.
    pub fn resolve(&self, handle: NodeHandle) -> Option<usize> {
        if handle.owner != self.id {
            return None;
        }
        match self.slots.get(handle.slot) {
            Some(s) if s.generation == handle.generation && s.entry.is_some() => {
                Some(handle.slot)
            }
            _ => None,
        }
    }

    pub fn live(&self, slot: usize) -> &NodeEntry {
        match self.slots[slot].entry {
            Some(ref e) => e,
            None => panic!("vacant node slot {}", slot),
        }
    }

    pub fn live_mut(&mut self, slot: usize) -> &mut NodeEntry {
        match self.slots[slot].entry {
            Some(ref mut e) => e,
            None => panic!("vacant node slot {}", slot),
        }
    }

    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

/// Borrowed view of one node, used for O(1) navigation.
#[derive(Copy, Clone)]
pub struct Node<'a> {
    store: &'a NodeStore,
    slot: usize,
}

impl<'a> Node<'a> {
    pub(crate) fn new(store: &'a NodeStore, slot: usize) -> Node<'a> {
        Node { store, slot }
    }

    pub fn handle(&self) -> NodeHandle {
        self.store.handle(self.slot)
    }

    pub fn next(&self) -> Option<Node<'a>> {
        let store = self.store;
        store.live(self.slot).next.map(|slot| Node::new(store, slot))
    }

    pub fn prev(&self) -> Option<Node<'a>> {
        let store = self.store;
        store.live(self.slot).prev.map(|slot| Node::new(store, slot))
    }

    /// Scalars come back as copies, `Custom` as another handle to the same
    /// payload.
    pub fn value(&self) -> Value {
        self.store.live(self.slot).value.clone()
    }

    pub fn value_ref(&self) -> &'a Value {
        &self.store.live(self.slot).value
    }
}

impl<'a> PartialEq for Node<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.handle() == other.handle()
    }
}

impl<'a> fmt::Debug for Node<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("slot", &self.slot)
            .field("value", self.value_ref())
            .finish()
    }
}
