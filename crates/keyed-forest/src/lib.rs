//! Red-black ordered map over a flat keyed node store.
//!
//! Built for execution environments where records cannot hold references
//! to each other and there is no null primitive: every parent/child link
//! is a `u128` key resolved through a single arena table, so the structure
//! stays flat and acyclic. On top of that discipline the crate provides
//! ordered-map semantics with O(log n) insertion; repeated inserts at one
//! key accumulate values in insertion order on a single node.
//!
//! The node key doubles as the comparison key. Only the key is ordered;
//! the value type carries no trait bounds.
//!
//! # Example
//!
//! ```
//! use keyed_forest::RbTree;
//!
//! let mut tree: RbTree<&str> = RbTree::new();
//! tree.insert(21, "a").unwrap();
//! tree.insert(15, "b").unwrap();
//! tree.insert(15, "c").unwrap();
//!
//! assert_eq!(tree.length(), 3);
//! assert_eq!(tree.node_count(), 2);
//! assert_eq!(tree.values_at(15).unwrap(), &["b", "c"]);
//! assert_eq!(tree.peek().unwrap(), (21, &"a"));
//! ```
//!
//! Deletion is not implemented; [`RbTree::transplant`] and
//! [`NodeStore::remove`] are the splice primitives a delete extension
//! would build on.

mod access;
mod insert;
mod rotate;

pub mod error;
pub mod node;
pub mod print;
pub mod store;
pub mod tree;

pub use error::TreeError;
pub use node::{Color, Node};
pub use print::print;
pub use store::NodeStore;
pub use tree::RbTree;
