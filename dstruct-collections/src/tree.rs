//! SearchTree - an unbalanced binary search tree.
//!
//! Each node exclusively owns its two subtrees. There are no parent links and
//! no rebalancing: inserting keys in sorted order builds a chain.
//!
//! # Ordering
//!
//! For every node, keys in the left subtree compare strictly less than the
//! node's key and keys in the right subtree compare greater **or equal**.
//! Duplicates are therefore accepted and always routed right, and
//! [`find`](SearchTree::find) / [`remove`](SearchTree::remove) act on the
//! first equal key met on the way down, which is the one closest to the root.
//!
//! # Removal
//!
//! Removing a node does not rotate anything. The removed node's left subtree
//! takes its place and the right subtree is grafted onto the end of the left
//! subtree's right spine:
//!
//! ```text
//!        15                  13
//!       /  \                   \
//!     13    18      ==>         18
//!          /                   /
//!        17                  17
//! ```
//!
//! Every key in the right subtree is `>=` every key in the left one, so the
//! ordering holds after the graft.
//!
//! # Example
//!
//! ```
//! use dstruct_collections::SearchTree;
//!
//! let mut tree = SearchTree::new();
//! for key in [10, 5, 15, 18, 13, 17] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.len(), 6);
//!
//! let removed = tree.remove(&15).unwrap();
//! assert_eq!(removed.key, 15);
//! assert_eq!(removed.replacement.map(|n| *n.elm()), Some(13));
//!
//! assert!(tree.find(&15).is_none());
//! assert!(tree.is_ordered());
//! ```

use core::cmp::Ordering;
use core::fmt;

use crate::{Compare, Natural};

type SubTree<T> = Option<Box<Node<T>>>;

/// A tree node: one key and two owned, optional subtrees.
pub struct Node<T> {
    elm: T,
    left: SubTree<T>,
    right: SubTree<T>,
}

impl<T> Node<T> {
    fn leaf(elm: T) -> Box<Self> {
        Box::new(Self {
            elm,
            left: None,
            right: None,
        })
    }

    /// Returns the node's key.
    #[inline]
    pub fn elm(&self) -> &T {
        &self.elm
    }

    /// Returns the left (strictly lesser) subtree.
    #[inline]
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Returns the right (greater or equal) subtree.
    #[inline]
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Returns the number of nodes in this subtree, including this one.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.left());
            pending.extend(node.right());
        }
        count
    }

    /// Checks the search-tree ordering of this subtree under `compare`.
    ///
    /// Each left child must compare less than its parent and each right child
    /// greater or equal, for every node in the subtree.
    pub fn is_ordered<C: Compare<T>>(&self, compare: &C) -> bool {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            if let Some(left) = node.left() {
                if compare.compare(&left.elm, &node.elm) != Ordering::Less {
                    return false;
                }
                pending.push(left);
            }
            if let Some(right) = node.right() {
                if compare.compare(&right.elm, &node.elm) == Ordering::Less {
                    return false;
                }
                pending.push(right);
            }
        }
        true
    }
}

// Children are shown by key only; a full dump would recurse once per level.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("elm", &self.elm)
            .field("left", &self.left().map(Node::elm))
            .field("right", &self.right().map(Node::elm))
            .finish()
    }
}

/// Result of a successful [`SearchTree::remove`].
#[derive(Debug)]
pub struct Removed<'a, T> {
    /// The key that was removed.
    pub key: T,
    /// The subtree now occupying the removed node's position, or `None` if
    /// the removed node was a leaf.
    pub replacement: Option<&'a Node<T>>,
}

/// An unbalanced binary search tree ordered by `C`.
///
/// `C` defaults to [`Natural`] (the key's [`Ord`]); any
/// `Fn(&T, &T) -> Ordering` can be used through
/// [`with_comparator`](SearchTree::with_comparator).
pub struct SearchTree<T, C = Natural> {
    root: SubTree<T>,
    compare: C,
}

impl<T: Ord> SearchTree<T> {
    /// Creates an empty tree ordered by `T`'s natural order.
    #[inline]
    pub const fn new() -> Self {
        Self {
            root: None,
            compare: Natural,
        }
    }
}

impl<T: Ord> Default for SearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> SearchTree<T, C> {
    /// Creates an empty tree ordered by `compare`.
    ///
    /// # Example
    ///
    /// ```
    /// use dstruct_collections::SearchTree;
    ///
    /// let mut tree = SearchTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.insert(1);
    /// tree.insert(2);
    /// // Reversed: 2 is "less" than 1, so it goes left.
    /// assert_eq!(tree.root().and_then(|n| n.left()).map(|n| *n.elm()), Some(2));
    /// ```
    #[inline]
    pub fn with_comparator(compare: C) -> Self {
        Self {
            root: None,
            compare,
        }
    }

    /// Returns the root node, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns `true` if the tree has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes. O(n).
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::count)
    }

    /// Inserts `key` as a new leaf and returns the new node.
    ///
    /// Keys less than a node go left; equal or greater keys go right. The
    /// root only changes when the tree was empty.
    pub fn insert(&mut self, key: T) -> &Node<T> {
        insert_at(&mut self.root, key, &self.compare)
    }

    /// Returns the first node on the search path whose key equals `key`.
    pub fn find(&self, key: &T) -> Option<&Node<T>> {
        let mut cur = self.root();
        while let Some(node) = cur {
            cur = match self.compare.compare(key, &node.elm) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Returns `true` if some node's key equals `key`.
    #[inline]
    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    /// Removes the first node on the search path whose key equals `key`.
    ///
    /// The removed node's subtrees are merged into its slot (see the module
    /// docs). Returns the removed key together with the new occupant of that
    /// slot, or `None` if no node matched, in which case the tree is
    /// unchanged.
    pub fn remove(&mut self, key: &T) -> Option<Removed<'_, T>> {
        let root_matches = match self.root.as_deref() {
            None => return None,
            Some(root) => self.compare.compare(key, &root.elm) == Ordering::Equal,
        };

        if root_matches {
            let root = self.root.take()?;
            let Node { elm, left, right } = *root;
            self.root = splice(left, right);
            trace!("removed root");
            return Some(Removed {
                key: elm,
                replacement: self.root.as_deref(),
            });
        }

        let root = self.root.as_deref_mut()?;
        let (elm, slot) = remove_below(root, key, &self.compare)?;
        Some(Removed {
            key: elm,
            replacement: slot.as_deref(),
        })
    }

    /// Checks the search-tree ordering of the whole tree.
    ///
    /// An empty tree is ordered.
    pub fn is_ordered(&self) -> bool {
        self.root().is_none_or(|root| root.is_ordered(&self.compare))
    }
}

impl<T, C> SearchTree<T, C> {
    /// Removes every node.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }

    /// Returns an in-order iterator over the keys.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
        };
        iter.descend_left(self.root.as_deref());
        iter
    }
}

impl<T, C> Drop for SearchTree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SearchTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a SearchTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`SearchTree`]'s keys.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn descend_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right());
        Some(&node.elm)
    }
}

// =============================================================================
// Structural helpers
// =============================================================================

/// Walks from `slot` to the empty link where `key` belongs and fills it.
fn insert_at<'a, T, C: Compare<T>>(
    mut slot: &'a mut SubTree<T>,
    key: T,
    compare: &C,
) -> &'a Node<T> {
    loop {
        match slot {
            Some(node) => {
                slot = if compare.compare(&key, &node.elm) == Ordering::Less {
                    &mut node.left
                } else {
                    &mut node.right
                };
            }
            None => return &**slot.insert(Node::leaf(key)),
        }
    }
}

/// Removes the matching node somewhere below `node`.
///
/// The direction is chosen by comparing against `node`, but the match test
/// is made on the child in that direction, so the parent link can be
/// rewritten in place. Returns the removed key and the rewritten link.
fn remove_below<'a, T, C: Compare<T>>(
    mut node: &'a mut Node<T>,
    key: &T,
    compare: &C,
) -> Option<(T, &'a SubTree<T>)> {
    loop {
        let slot = if compare.compare(key, &node.elm) == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };

        let child_matches = match slot.as_deref() {
            None => return None,
            Some(child) => compare.compare(&child.elm, key) == Ordering::Equal,
        };

        if child_matches {
            let child = slot.take()?;
            let Node { elm, left, right } = *child;
            *slot = splice(left, right);
            trace!("removed interior node");
            let slot: &'a SubTree<T> = slot;
            return Some((elm, slot));
        }

        node = slot.as_deref_mut()?;
    }
}

/// Joins the two subtrees of a removed node.
fn splice<T>(lesser: SubTree<T>, greater: SubTree<T>) -> SubTree<T> {
    match lesser {
        None => greater,
        Some(lesser) => Some(merge(lesser, greater)),
    }
}

/// Grafts `greater` onto the first empty link of `lesser`'s right spine and
/// returns `lesser`.
fn merge<T>(mut lesser: Box<Node<T>>, greater: SubTree<T>) -> Box<Node<T>> {
    let mut spine = &mut lesser.right;
    loop {
        match spine {
            Some(node) => spine = &mut node.right,
            None => {
                *spine = greater;
                break;
            }
        }
    }
    lesser
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn tree_of(keys: &[i64]) -> SearchTree<i64> {
        let mut tree = SearchTree::new();
        for &k in keys {
            tree.insert(k);
        }
        tree
    }

    fn keys<C>(tree: &SearchTree<i64, C>) -> Vec<i64> {
        tree.iter().copied().collect()
    }

    // ========================================================================
    // Insert / find
    // ========================================================================

    #[test]
    fn new_is_empty() {
        let tree: SearchTree<i64> = SearchTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.root().is_none());
        assert!(tree.is_ordered());
        assert!(tree.find(&1).is_none());
    }

    #[test]
    fn insert_builds_expected_shape() {
        let mut tree = SearchTree::new();

        assert_eq!(*tree.insert(10).elm(), 10);
        assert_eq!(tree.len(), 1);

        tree.insert(5);
        tree.insert(15);
        let root = tree.root().unwrap();
        assert_eq!(*root.elm(), 10);
        assert_eq!(root.left().map(|n| *n.elm()), Some(5));
        assert_eq!(root.right().map(|n| *n.elm()), Some(15));
        assert_eq!(tree.len(), 3);
        assert!(tree.is_ordered());

        tree.insert(18);
        tree.insert(13);
        let fifteen = tree.find(&15).unwrap();
        assert_eq!(fifteen.right().map(|n| *n.elm()), Some(18));
        assert_eq!(fifteen.left().map(|n| *n.elm()), Some(13));
        assert_eq!(tree.len(), 5);

        let leaf = tree.insert(17);
        assert_eq!(*leaf.elm(), 17);
        assert!(leaf.left().is_none() && leaf.right().is_none());
        let eighteen = tree.find(&18).unwrap();
        assert_eq!(eighteen.left().map(|n| *n.elm()), Some(17));
        assert_eq!(tree.len(), 6);
        assert!(tree.is_ordered());
    }

    #[test]
    fn find_hits_and_misses() {
        let tree = tree_of(&[10, 5, 15, 18, 13, 17]);
        for k in [10, 5, 15, 18, 13, 17] {
            assert_eq!(tree.find(&k).map(|n| *n.elm()), Some(k));
        }
        for k in [0, 6, 14, 16, 19] {
            assert!(tree.find(&k).is_none());
            assert!(!tree.contains(&k));
        }
    }

    #[test]
    fn duplicates_route_right() {
        let tree = tree_of(&[5, 5, 5]);
        let root = tree.root().unwrap();
        assert!(root.left().is_none());
        let second = root.right().unwrap();
        assert_eq!(*second.elm(), 5);
        assert_eq!(second.right().map(|n| *n.elm()), Some(5));
        assert!(tree.is_ordered());
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn sorted_inserts_form_chain() {
        let tree = tree_of(&[1, 2, 3, 4]);
        let mut node = tree.root();
        let mut depth = 0;
        while let Some(n) = node {
            assert!(n.left().is_none());
            node = n.right();
            depth += 1;
        }
        assert_eq!(depth, 4);
    }

    // ========================================================================
    // Remove
    // ========================================================================

    #[test]
    fn remove_scenario() {
        let mut tree = tree_of(&[10, 5, 15, 18, 13, 17]);

        let removed = tree.remove(&15).unwrap();
        assert_eq!(removed.key, 15);
        assert_eq!(removed.replacement.map(|n| *n.elm()), Some(13));
        assert_eq!(tree.len(), 5);
        assert!(tree.find(&15).is_none());
        assert!(tree.is_ordered());

        let removed = tree.remove(&10).unwrap();
        assert_eq!(removed.key, 10);
        assert_eq!(removed.replacement.map(|n| *n.elm()), Some(5));
        assert_eq!(tree.root().map(|n| *n.elm()), Some(5));
        assert_eq!(tree.len(), 4);

        assert_eq!(tree.find(&17).map(|n| *n.elm()), Some(17));
        assert!(tree.is_ordered());
        assert_eq!(keys(&tree), [5, 13, 17, 18]);
    }

    #[test]
    fn remove_grafts_right_subtree_on_right_spine() {
        let mut tree = tree_of(&[50, 30, 70, 20, 40, 45, 60]);
        tree.remove(&50).unwrap();

        // 30 becomes the root; 70 hangs off the end of 30's right spine.
        let root = tree.root().unwrap();
        assert_eq!(*root.elm(), 30);
        let forty = root.right().unwrap();
        assert_eq!(*forty.elm(), 40);
        let forty_five = forty.right().unwrap();
        assert_eq!(*forty_five.elm(), 45);
        assert_eq!(forty_five.right().map(|n| *n.elm()), Some(70));
        assert!(tree.is_ordered());
    }

    #[test]
    fn remove_root_without_left_promotes_right() {
        let mut tree = tree_of(&[10, 20, 15]);
        let removed = tree.remove(&10).unwrap();
        assert_eq!(removed.replacement.map(|n| *n.elm()), Some(20));
        assert_eq!(tree.root().map(|n| *n.elm()), Some(20));
        assert_eq!(keys(&tree), [15, 20]);
    }

    #[test]
    fn remove_leaf_has_no_replacement() {
        let mut tree = tree_of(&[10, 5, 15]);
        let removed = tree.remove(&5).unwrap();
        assert_eq!(removed.key, 5);
        assert!(removed.replacement.is_none());
        assert!(tree.root().unwrap().left().is_none());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn remove_only_node_empties_tree() {
        let mut tree = tree_of(&[1]);
        let removed = tree.remove(&1).unwrap();
        assert!(removed.replacement.is_none());
        assert!(tree.is_empty());
        assert!(tree.is_ordered());
    }

    #[test]
    fn remove_missing_leaves_tree_untouched() {
        let mut tree = tree_of(&[10, 5, 15]);
        assert!(tree.remove(&7).is_none());
        assert!(tree.remove(&99).is_none());
        assert_eq!(keys(&tree), [5, 10, 15]);

        let mut empty: SearchTree<i64> = SearchTree::new();
        assert!(empty.remove(&1).is_none());
    }

    #[test]
    fn remove_deep_node_rewrites_its_parent() {
        // Match at depth 3: 12 is the left child of 14.
        let mut tree = tree_of(&[10, 5, 15, 14, 12, 11, 13]);
        let removed = tree.remove(&12).unwrap();
        assert_eq!(removed.replacement.map(|n| *n.elm()), Some(11));

        let fourteen = tree.find(&14).unwrap();
        let eleven = fourteen.left().unwrap();
        assert_eq!(*eleven.elm(), 11);
        assert_eq!(eleven.right().map(|n| *n.elm()), Some(13));
        assert_eq!(keys(&tree), [5, 10, 11, 13, 14, 15]);
        assert!(tree.is_ordered());
    }

    #[test]
    fn remove_duplicate_takes_nearest_to_root() {
        let mut tree = tree_of(&[5, 3, 5, 8, 5]);
        assert_eq!(tree.len(), 5);

        tree.remove(&5).unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.root().map(|n| *n.elm()), Some(3));
        assert_eq!(keys(&tree), [3, 5, 5, 8]);
        assert!(tree.is_ordered());

        tree.remove(&5).unwrap();
        tree.remove(&5).unwrap();
        assert!(tree.remove(&5).is_none());
        assert_eq!(keys(&tree), [3, 8]);
    }

    // ========================================================================
    // Ordering check / comparators
    // ========================================================================

    #[test]
    fn is_ordered_detects_violation() {
        let mut tree = tree_of(&[10, 5, 15]);
        assert!(tree.is_ordered());

        // Corrupt the left child so it is no longer less than the root.
        if let Some(root) = tree.root.as_deref_mut() {
            if let Some(left) = root.left.as_deref_mut() {
                left.elm = 11;
            }
        }
        assert!(!tree.is_ordered());
    }

    #[test]
    fn is_ordered_rejects_equal_on_left() {
        let mut tree = tree_of(&[10, 5]);
        if let Some(root) = tree.root.as_deref_mut() {
            if let Some(left) = root.left.as_deref_mut() {
                left.elm = 10;
            }
        }
        assert!(!tree.is_ordered());
    }

    #[test]
    fn custom_comparator_orders_by_projection() {
        let mut tree =
            SearchTree::with_comparator(|a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0));
        tree.insert((2, "two"));
        tree.insert((1, "one"));
        tree.insert((3, "three"));

        assert_eq!(tree.find(&(1, "")).map(|n| n.elm().1), Some("one"));
        assert!(tree.is_ordered());

        let names: Vec<&str> = tree.iter().map(|e| e.1).collect();
        assert_eq!(names, ["one", "two", "three"]);
    }

    #[test]
    fn iter_is_in_order() {
        let tree = tree_of(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
        assert_eq!(keys(&tree), [1, 3, 4, 6, 7, 8, 10, 13, 14]);
        assert_eq!(format!("{:?}", tree), "{1, 3, 4, 6, 7, 8, 10, 13, 14}");
    }

    #[test]
    fn clear_and_reuse() {
        let mut tree = tree_of(&[3, 1, 2]);
        tree.clear();
        assert!(tree.is_empty());
        tree.insert(4);
        assert_eq!(keys(&tree), [4]);
    }

    const CHAIN: u32 = 100_000;

    /// Builds `keys` as a right-leaning chain hanging off `slot`, without the
    /// quadratic cost of inserting them one by one.
    fn graft_chain(mut slot: &mut SubTree<u32>, keys: core::ops::Range<u32>) {
        for k in keys {
            let node = slot.insert(Node::leaf(k));
            slot = &mut node.right;
        }
    }

    #[test]
    fn long_chain_operations() {
        let mut tree = SearchTree::new();
        graft_chain(&mut tree.root, 0..CHAIN);

        assert_eq!(tree.len(), CHAIN as usize);
        assert!(tree.is_ordered());

        let leaf = tree.insert(CHAIN);
        assert_eq!(*leaf.elm(), CHAIN);
        assert_eq!(tree.len(), CHAIN as usize + 1);
        assert!(tree.contains(&CHAIN));

        let removed = tree.remove(&(CHAIN - 1)).unwrap();
        assert_eq!(removed.key, CHAIN - 1);
        assert_eq!(removed.replacement.map(|n| *n.elm()), Some(CHAIN));
        assert_eq!(tree.len(), CHAIN as usize);
        assert!(!tree.contains(&(CHAIN - 1)));
        assert!(tree.is_ordered());

        assert_eq!(tree.iter().count(), CHAIN as usize);
        drop(tree);
    }

    #[test]
    fn remove_merges_onto_long_right_spine() {
        let mut tree = SearchTree::new();
        tree.insert(CHAIN);
        if let Some(root) = tree.root.as_deref_mut() {
            graft_chain(&mut root.left, 0..CHAIN);
        }
        tree.insert(CHAIN + 1);

        let removed = tree.remove(&CHAIN).unwrap();
        assert_eq!(removed.replacement.map(|n| *n.elm()), Some(0));
        assert_eq!(tree.len(), CHAIN as usize + 1);
        assert!(tree.is_ordered());
        assert_eq!(tree.iter().last(), Some(&(CHAIN + 1)));
    }

    #[test]
    fn node_debug_shows_child_keys() {
        let tree = tree_of(&[10, 5, 15]);
        let root = tree.root().unwrap();
        assert_eq!(
            format!("{:?}", root),
            "Node { elm: 10, left: Some(5), right: Some(15) }"
        );
    }

    // ========================================================================
    // Stress
    // ========================================================================

    #[test]
    fn stress_against_sorted_vec() {
        let mut rng = SmallRng::seed_from_u64(0xb57);
        let mut tree: SearchTree<i64> = SearchTree::new();
        let mut reference: Vec<i64> = Vec::new();

        for _ in 0..3_000 {
            let key = rng.random_range(0..150);
            if rng.random_range(0..100) < 60 {
                tree.insert(key);
                let at = reference.partition_point(|&k| k <= key);
                reference.insert(at, key);
            } else {
                let expected = reference.iter().position(|&k| k == key);
                match (tree.remove(&key), expected) {
                    (Some(removed), Some(at)) => {
                        assert_eq!(removed.key, key);
                        reference.remove(at);
                    }
                    (None, None) => {}
                    (got, want) => panic!("remove({key}) mismatch: {got:?} vs {want:?}"),
                }
            }

            assert!(tree.is_ordered());
            assert_eq!(tree.len(), reference.len());
        }

        assert_eq!(keys(&tree), reference);
    }
}
