//! Keyed node arena.

use std::collections::HashMap;

use crate::node::Node;

/// Flat arena mapping node keys to node records.
///
/// The store owns every node; parent/child/sibling structure exists only
/// as keys resolved through this table. All operations are O(1) amortized.
#[derive(Debug, Clone)]
pub struct NodeStore<V> {
    nodes: HashMap<u128, Node<V>>,
}

impl<V> NodeStore<V> {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    pub fn contains(&self, key: u128) -> bool {
        self.nodes.contains_key(&key)
    }

    pub fn get(&self, key: u128) -> Option<&Node<V>> {
        self.nodes.get(&key)
    }

    pub fn get_mut(&mut self, key: u128) -> Option<&mut Node<V>> {
        self.nodes.get_mut(&key)
    }

    /// Inserts a record under its own key, replacing any previous record.
    pub fn insert(&mut self, node: Node<V>) {
        self.nodes.insert(node.key, node);
    }

    /// Removes a record. Insertion never removes nodes; this exists for a
    /// delete extension built on [`RbTree::transplant`].
    ///
    /// [`RbTree::transplant`]: crate::tree::RbTree::transplant
    pub fn remove(&mut self, key: u128) -> Option<Node<V>> {
        self.nodes.remove(&key)
    }

    /// Number of nodes (distinct keys), not values.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<V> Default for NodeStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
