//! Insertion and red-black repair.

use crate::error::TreeError;
use crate::node::{Color, Node};
use crate::tree::RbTree;

impl<V> RbTree<V> {
    /// Inserts `value` under `key`.
    ///
    /// An existing key accumulates the value in its node's sequence, in
    /// insertion order, with no shape change; a new key is linked as a red
    /// leaf and the tree is repaired. [`length`] grows by one either way.
    ///
    /// [`length`]: RbTree::length
    pub fn insert(&mut self, key: u128, value: V) -> Result<(), TreeError> {
        let Some(root) = self.root else {
            let mut node = Node::new(key, value);
            node.color = Color::Black;
            self.store.insert(node);
            self.set_root_node(key)?;
            self.size += 1;
            return Ok(());
        };

        let mut curr = root;
        loop {
            let (curr_key, left, right) = {
                let n = self.node(curr)?;
                (n.key, n.left, n.right)
            };
            if key == curr_key {
                self.node_mut(curr)?.values.push(value);
                break;
            }
            let next = if key < curr_key { left } else { right };
            match next {
                Some(n) => curr = n,
                None => {
                    let mut node = Node::new(key, value);
                    node.parent = Some(curr);
                    self.store.insert(node);
                    let cn = self.node_mut(curr)?;
                    if key < cn.key {
                        cn.left = Some(key);
                    } else {
                        cn.right = Some(key);
                    }
                    break;
                }
            }
        }

        self.size += 1;
        self.fix_up_insertion(key)
    }

    /// Restores the red-black invariants after placement, walking upward
    /// from the touched key. Repair targets a red-red edge, so it runs only
    /// while the current node and its parent are both red; an append lands
    /// on an existing node without changing the shape and never qualifies.
    fn fix_up_insertion(&mut self, key: u128) -> Result<(), TreeError> {
        let mut current = key;
        loop {
            // A black current node cannot sit on the violating end of a
            // red-red edge; rotating it would unbalance black heights.
            if self.is_black(current)? {
                break;
            }
            let Some(mut parent) = self.node(current)?.parent else {
                break;
            };
            if self.is_black(parent)? {
                break;
            }
            // A red non-root parent always has a parent of its own.
            let mut grandparent = self.parent_key(parent)?;
            let parent_is_left = self.is_left_child_of(parent, grandparent)?;

            let uncle = self.uncle_key(current)?;
            if let Some(u) = uncle {
                if self.is_red(u)? {
                    // Red uncle: push blackness down from the grandparent
                    // and move the violation two levels up.
                    self.node_mut(parent)?.color = Color::Black;
                    self.node_mut(u)?.color = Color::Black;
                    self.node_mut(grandparent)?.color = Color::Red;
                    current = grandparent;
                    continue;
                }
            }

            let inner = if parent_is_left {
                self.node(parent)?.right == Some(current)
            } else {
                self.node(parent)?.left == Some(current)
            };
            if inner {
                // Inner grandchild: rotate it outward first.
                if parent_is_left {
                    self.rotate_left(parent, current)?;
                } else {
                    self.rotate_right(parent, current)?;
                }
                current = parent;
                parent = self.parent_key(current)?;
                grandparent = self.parent_key(parent)?;
            }

            // Outer grandchild: recolor, then rotate the grandparent down.
            self.node_mut(parent)?.color = Color::Black;
            self.node_mut(grandparent)?.color = Color::Red;
            if parent_is_left {
                self.rotate_right(grandparent, parent)?;
            } else {
                self.rotate_left(grandparent, parent)?;
            }
        }

        // Absorbs the case where recoloring propagated to the root.
        let root = self.root.ok_or(TreeError::TreeIsEmpty)?;
        self.node_mut(root)?.color = Color::Black;
        Ok(())
    }
}
