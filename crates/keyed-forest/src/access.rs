//! Structural accessors over the node store.
//!
//! Every component above the store goes through these. Presence queries
//! return booleans; unconditional link reads fail with
//! [`TreeError::InvalidKeyAccess`] when the link is unset; any key absent
//! from the store is [`TreeError::NodeNotFound`].

use crate::error::TreeError;
use crate::node::Node;
use crate::tree::RbTree;

impl<V> RbTree<V> {
    pub(crate) fn node(&self, key: u128) -> Result<&Node<V>, TreeError> {
        self.store.get(key).ok_or(TreeError::NodeNotFound)
    }

    pub(crate) fn node_mut(&mut self, key: u128) -> Result<&mut Node<V>, TreeError> {
        self.store.get_mut(key).ok_or(TreeError::NodeNotFound)
    }

    /// Installs `key` as the tree root and clears its parent link.
    ///
    /// The only way the root pointer changes; the root's parent link is
    /// never set.
    pub fn set_root_node(&mut self, key: u128) -> Result<(), TreeError> {
        self.node_mut(key)?.parent = None;
        self.root = Some(key);
        Ok(())
    }

    pub fn has_parent(&self, key: u128) -> Result<bool, TreeError> {
        Ok(self.node(key)?.parent.is_some())
    }

    pub fn has_left_child(&self, key: u128) -> Result<bool, TreeError> {
        Ok(self.node(key)?.left.is_some())
    }

    pub fn has_right_child(&self, key: u128) -> Result<bool, TreeError> {
        Ok(self.node(key)?.right.is_some())
    }

    pub fn has_grandparent(&self, key: u128) -> Result<bool, TreeError> {
        match self.node(key)?.parent {
            Some(parent) => self.has_parent(parent),
            None => Ok(false),
        }
    }

    pub fn is_root(&self, key: u128) -> Result<bool, TreeError> {
        self.node(key)?;
        Ok(self.root == Some(key))
    }

    pub fn parent_key(&self, key: u128) -> Result<u128, TreeError> {
        self.node(key)?.parent.ok_or(TreeError::InvalidKeyAccess)
    }

    pub fn left_child_key(&self, key: u128) -> Result<u128, TreeError> {
        self.node(key)?.left.ok_or(TreeError::InvalidKeyAccess)
    }

    pub fn right_child_key(&self, key: u128) -> Result<u128, TreeError> {
        self.node(key)?.right.ok_or(TreeError::InvalidKeyAccess)
    }

    pub fn grandparent_key(&self, key: u128) -> Result<u128, TreeError> {
        self.parent_key(self.parent_key(key)?)
    }

    /// The grandparent's other child, if present.
    pub fn uncle_key(&self, key: u128) -> Result<Option<u128>, TreeError> {
        let parent = self.parent_key(key)?;
        let grandparent = self.parent_key(parent)?;
        let gn = self.node(grandparent)?;
        if gn.left == Some(parent) {
            Ok(gn.right)
        } else {
            Ok(gn.left)
        }
    }

    pub fn is_red(&self, key: u128) -> Result<bool, TreeError> {
        Ok(self.node(key)?.is_red())
    }

    pub fn is_black(&self, key: u128) -> Result<bool, TreeError> {
        Ok(self.node(key)?.is_black())
    }

    /// Color of the left child. Absent children count as black.
    pub fn left_child_is_red(&self, key: u128) -> Result<bool, TreeError> {
        match self.node(key)?.left {
            Some(left) => self.is_red(left),
            None => Ok(false),
        }
    }

    /// Color of the right child. Absent children count as black.
    pub fn right_child_is_red(&self, key: u128) -> Result<bool, TreeError> {
        match self.node(key)?.right {
            Some(right) => self.is_red(right),
            None => Ok(false),
        }
    }

    pub(crate) fn is_left_child_of(&self, key: u128, parent: u128) -> Result<bool, TreeError> {
        Ok(self.node(parent)?.left == Some(key))
    }
}
