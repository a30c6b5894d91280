//! Flat node record.

/// Node color. New nodes start red; the root is forced black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// A tree vertex stored as a flat record in the node store.
///
/// Links are keys resolved through the owning [`NodeStore`], not
/// references, so the record itself can never form a cycle. The node key
/// doubles as the comparison key: there is no separate identifier scheme.
///
/// [`NodeStore`]: crate::store::NodeStore
#[derive(Debug, Clone)]
pub struct Node<V> {
    pub key: u128,
    /// Values inserted under `key`, in insertion order. Never empty.
    pub values: Vec<V>,
    pub parent: Option<u128>,
    pub left: Option<u128>,
    pub right: Option<u128>,
    pub color: Color,
}

impl<V> Node<V> {
    /// A fresh red leaf holding a single value.
    pub fn new(key: u128, value: V) -> Self {
        Self {
            key,
            values: vec![value],
            parent: None,
            left: None,
            right: None,
            color: Color::Red,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }
}
