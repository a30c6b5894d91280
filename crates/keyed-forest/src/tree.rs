//! Tree owner type, query surface, and invariant checker.

use crate::error::TreeError;
use crate::store::NodeStore;

/// Red-black ordered map keyed by `u128`, generic over the stored value.
///
/// `size` counts stored values, not nodes: repeated inserts at one key
/// accumulate in that node's value sequence without allocating a new node.
/// The tree owns its [`NodeStore`] exclusively; callers serialize access.
#[derive(Debug, Clone)]
pub struct RbTree<V> {
    pub(crate) size: u128,
    pub(crate) root: Option<u128>,
    pub(crate) store: NodeStore<V>,
}

impl<V> RbTree<V> {
    pub fn new() -> Self {
        Self {
            size: 0,
            root: None,
            store: NodeStore::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of stored values. Not the node count.
    pub fn length(&self) -> u128 {
        self.size
    }

    /// Number of distinct keys.
    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    pub fn contains_key(&self, key: u128) -> bool {
        self.store.contains(key)
    }

    /// Key of the current root, if any.
    pub fn root_key(&self) -> Option<u128> {
        self.root
    }

    /// First value inserted under `key`.
    pub fn value_at(&self, key: u128) -> Result<&V, TreeError> {
        Ok(&self.values_at(key)?[0])
    }

    /// Full value sequence stored under `key`, in insertion order.
    pub fn values_at(&self, key: u128) -> Result<&[V], TreeError> {
        if self.root.is_none() {
            return Err(TreeError::TreeIsEmpty);
        }
        let node = self.store.get(key).ok_or(TreeError::KeyNotSet)?;
        Ok(&node.values)
    }

    /// Root key and the first value stored at the root.
    ///
    /// This is the root, not the minimum or maximum key: after rebalancing
    /// the root is whichever key rotations left on top.
    pub fn peek(&self) -> Result<(u128, &V), TreeError> {
        let root = self.root.ok_or(TreeError::TreeIsEmpty)?;
        let node = self.store.get(root).ok_or(TreeError::NodeNotFound)?;
        Ok((node.key, &node.values[0]))
    }

    /// Keys in ascending order.
    pub fn in_order_keys(&self) -> Result<Vec<u128>, TreeError> {
        let mut out = Vec::with_capacity(self.store.len());
        let Some(root) = self.root else {
            return Ok(out);
        };
        let mut curr = Some(self.leftmost(root)?);
        while let Some(key) = curr {
            out.push(key);
            curr = self.next_in_order(key)?;
        }
        Ok(out)
    }

    /// Leftmost key of the subtree rooted at `from`.
    fn leftmost(&self, from: u128) -> Result<u128, TreeError> {
        let mut curr = from;
        while let Some(left) = self.node(curr)?.left {
            curr = left;
        }
        Ok(curr)
    }

    /// In-order successor of `key`, if any.
    fn next_in_order(&self, key: u128) -> Result<Option<u128>, TreeError> {
        let node = self.node(key)?;
        if let Some(right) = node.right {
            return self.leftmost(right).map(Some);
        }
        let mut curr = key;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let pn = self.node(p)?;
            if pn.right == Some(curr) {
                curr = p;
                parent = pn.parent;
            } else {
                return Ok(Some(p));
            }
        }
        Ok(None)
    }

    /// Checks the full structural contract: root coupling, color rules,
    /// black-height balance, back-pointers, reachability, key order, and
    /// the value-count/size agreement. Intended for tests and debugging.
    pub fn assert_invariants(&self) -> Result<(), String> {
        let Some(root) = self.root else {
            if self.size != 0 {
                return Err("size non-zero on rootless tree".to_string());
            }
            if !self.store.is_empty() {
                return Err("rootless tree holds nodes".to_string());
            }
            return Ok(());
        };

        if self.size == 0 {
            return Err("root set on zero-size tree".to_string());
        }
        let root_node = self
            .store
            .get(root)
            .ok_or_else(|| "root missing from store".to_string())?;
        if root_node.parent.is_some() {
            return Err("root has parent".to_string());
        }
        if root_node.is_red() {
            return Err("root is not black".to_string());
        }

        self.check_subtree(root)?;

        let keys = self
            .in_order_keys()
            .map_err(|e| format!("in-order walk failed: {e}"))?;
        if keys.len() != self.store.len() {
            return Err("unreachable nodes in store".to_string());
        }
        let mut values: u128 = 0;
        for pair in keys.windows(2) {
            if pair[0] >= pair[1] {
                return Err("key order violated".to_string());
            }
        }
        for key in &keys {
            let node = self
                .store
                .get(*key)
                .ok_or_else(|| format!("node {key} missing from store"))?;
            values += node.values.len() as u128;
        }
        if values != self.size {
            return Err(format!(
                "size is {} but tree holds {values} values",
                self.size
            ));
        }
        Ok(())
    }

    /// Checks colors and back-pointers below `key`; returns black height.
    fn check_subtree(&self, key: u128) -> Result<usize, String> {
        let node = self
            .store
            .get(key)
            .ok_or_else(|| format!("node {key} missing from store"))?;
        if node.values.is_empty() {
            return Err(format!("node {key} holds no values"));
        }
        if let Some(left) = node.left {
            let ln = self
                .store
                .get(left)
                .ok_or_else(|| format!("left link of {key} dangles"))?;
            if ln.parent != Some(key) {
                return Err(format!("broken parent link on left child of {key}"));
            }
            if node.is_red() && ln.is_red() {
                return Err(format!("red node {key} has red left child"));
            }
        }
        if let Some(right) = node.right {
            let rn = self
                .store
                .get(right)
                .ok_or_else(|| format!("right link of {key} dangles"))?;
            if rn.parent != Some(key) {
                return Err(format!("broken parent link on right child of {key}"));
            }
            if node.is_red() && rn.is_red() {
                return Err(format!("red node {key} has red right child"));
            }
        }

        let lh = match node.left {
            Some(left) => self.check_subtree(left)?,
            None => 0,
        };
        let rh = match node.right {
            Some(right) => self.check_subtree(right)?,
            None => 0,
        };
        if lh != rh {
            return Err(format!("black height mismatch under {key}"));
        }
        Ok(lh + usize::from(node.is_black()))
    }
}

impl<V> Default for RbTree<V> {
    fn default() -> Self {
        Self::new()
    }
}
