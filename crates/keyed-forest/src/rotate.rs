//! Rotations and the transplant splice.
//!
//! Rotations re-root a three-node neighborhood while preserving the
//! in-order key sequence; they never touch value sequences or colors.
//! Preconditions are checked before any link changes, so a failed call
//! leaves the tree untouched.

use crate::error::TreeError;
use crate::tree::RbTree;

impl<V> RbTree<V> {
    /// Left-rotates the edge between `parent` and its right child `child`.
    ///
    /// `child`'s left subtree migrates under `parent` as its new right
    /// subtree; `child` takes `parent`'s former slot (root, or child of
    /// `parent`'s old parent) and `parent` becomes `child`'s left child.
    pub fn rotate_left(&mut self, parent: u128, child: u128) -> Result<(), TreeError> {
        let pn = self.node(parent)?;
        let cn = self.node(child)?;
        if pn.right != Some(child) || cn.parent != Some(parent) {
            return Err(TreeError::InvalidRotationNodes);
        }
        let grandparent = pn.parent;
        let moved = cn.left;

        self.node_mut(parent)?.right = moved;
        if let Some(m) = moved {
            self.node_mut(m)?.parent = Some(parent);
        }

        match grandparent {
            Some(g) => {
                let gn = self.node_mut(g)?;
                if gn.left == Some(parent) {
                    gn.left = Some(child);
                } else {
                    gn.right = Some(child);
                }
                self.node_mut(child)?.parent = Some(g);
            }
            None => self.set_root_node(child)?,
        }

        self.node_mut(child)?.left = Some(parent);
        self.node_mut(parent)?.parent = Some(child);
        Ok(())
    }

    /// Mirror of [`rotate_left`]: `child` must be `parent`'s left child;
    /// `child`'s right subtree migrates to become `parent`'s new left
    /// subtree.
    ///
    /// [`rotate_left`]: RbTree::rotate_left
    pub fn rotate_right(&mut self, parent: u128, child: u128) -> Result<(), TreeError> {
        let pn = self.node(parent)?;
        let cn = self.node(child)?;
        if pn.left != Some(child) || cn.parent != Some(parent) {
            return Err(TreeError::InvalidRotationNodes);
        }
        let grandparent = pn.parent;
        let moved = cn.right;

        self.node_mut(parent)?.left = moved;
        if let Some(m) = moved {
            self.node_mut(m)?.parent = Some(parent);
        }

        match grandparent {
            Some(g) => {
                let gn = self.node_mut(g)?;
                if gn.left == Some(parent) {
                    gn.left = Some(child);
                } else {
                    gn.right = Some(child);
                }
                self.node_mut(child)?.parent = Some(g);
            }
            None => self.set_root_node(child)?,
        }

        self.node_mut(child)?.right = Some(parent);
        self.node_mut(parent)?.parent = Some(child);
        Ok(())
    }

    /// Splices `child` into `parent`'s attachment point: root, or the
    /// corresponding child slot of `parent`'s parent. Repoints `child`'s
    /// parent link and nothing else; callers rewire `child`'s subtrees and
    /// rebalance themselves. Building block for a delete extension.
    pub fn transplant(&mut self, parent: u128, child: u128) -> Result<(), TreeError> {
        let former = self.node(parent)?.parent;
        self.node(child)?;
        match former {
            Some(g) => {
                let gn = self.node_mut(g)?;
                if gn.left == Some(parent) {
                    gn.left = Some(child);
                } else {
                    gn.right = Some(child);
                }
                self.node_mut(child)?.parent = Some(g);
            }
            None => self.set_root_node(child)?,
        }
        Ok(())
    }
}
