//! An unbalanced Binary Search Tree over a single set of keys.
//!
//! Operations that would modify the tree take `&mut self` and report what
//! they did; nothing is rebalanced, so the shape of the tree depends on the
//! order in which keys arrive.
//!
//! # Examples
//!
//! ```
//! use bstree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // A key is stored at most once.
//! assert!(!tree.insert(1));
//!
//! // Removing a key reports whether it was present.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;

/// A Binary Search Tree storing a set of keys. This can be used for
/// inserting, finding, and removing keys, iterating them in several
/// traversal orders, and measuring the tree.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Option<Box<Node<K>>>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Unlink children onto a worklist before each node drops, so a
        // degenerate chain is freed without recursing once per node.
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Potentially finds the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// The lookup walks the whole subtree (the node itself, then its left
    /// subtree, then its right), short-circuiting on the first match, so it
    /// is linear in the number of nodes rather than guided by the ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        self.root
            .as_deref()
            .and_then(|node| node.search(key))
            .map(|node| &node.key)
    }

    /// Inserts the given key into the tree. Returns `true` if the key was
    /// added and `false` if it was already present, in which case the tree
    /// is left untouched.
    ///
    /// A new key descends from the root, going left when it is smaller than
    /// the node under inspection and right otherwise, and is attached as a
    /// leaf at the first empty link.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        if self.find(&key).is_some() {
            return false;
        }

        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                // Equal cannot occur: the lookup above rejected duplicates.
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Box::new(Node::new(key)));
        true
    }

    /// Removes the node containing the given key and returns whether one
    /// was found. Removing an absent key leaves the tree untouched.
    ///
    /// A node with two children keeps its place in the tree: the smallest
    /// key of its right subtree (the in-order successor) is moved into it
    /// and the successor's node, which has no left child, is unlinked.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3]);
    /// ```
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        Node::remove_from(&mut self.root, key)
    }

    /// The smallest key in the tree, found by following left links from the
    /// root. `None` on an empty tree.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// An in-order traversal of the keys: left subtree, node, right
    /// subtree. For a valid tree this yields the keys in ascending order.
    ///
    /// Each call returns a fresh, lazy iterator borrowing the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref())
    }

    /// A pre-order traversal of the keys: node, left subtree, right
    /// subtree.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// A post-order traversal of the keys: left subtree, right subtree,
    /// node.
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder {
            stack: self.root.as_deref().map(|node| (node, false)).into_iter().collect(),
        }
    }

    /// The number of keys in the tree.
    ///
    /// Subtrees whose left-only and right-only spines have the same length
    /// are assumed to be perfect and counted with the closed form
    /// `2^height - 1` instead of being visited. Matching outer spines do
    /// not actually guarantee a perfect interior, so the total can be wrong
    /// for some shapes; the tests pin down where.
    pub fn count(&self) -> usize {
        Node::count_nodes(self.root.as_deref())
    }

    /// How many links can be followed from the root to the deepest leaf.
    /// An empty tree has depth `-1` and a root-only tree has depth `0`.
    pub fn depth(&self) -> isize {
        Node::depth_below(self.root.as_deref())
    }
}

/// A `Node` has a key that is used for searching/sorting and owns its two
/// optional children outright: relinking a subtree means moving the child
/// out of one link and into another.
#[derive(Clone, Debug)]
struct Node<K> {
    key: K,
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// Finds the node holding `key` anywhere in the subtree rooted at
    /// `self`: the node itself first, then the left subtree, then the
    /// right, stopping at the first match.
    fn search(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        if self.key == *key {
            return Some(self);
        }
        if let Some(hit) = self.left.as_deref().and_then(|node| node.search(key)) {
            return Some(hit);
        }
        self.right.as_deref().and_then(|node| node.search(key))
    }

    /// Removes the node with the given `key` from the subtree behind
    /// `link`, rewiring the link to whatever replaces it. Returns whether a
    /// node was removed.
    fn remove_from(link: &mut Option<Box<Self>>, key: &K) -> bool
    where
        K: Ord,
    {
        match link {
            None => false,
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::remove_from(&mut node.left, key),
                Ordering::Greater => Self::remove_from(&mut node.right, key),
                Ordering::Equal => {
                    match (node.left.take(), node.right.take()) {
                        (None, None) => *link = None,
                        (None, Some(right)) => *link = Some(right),
                        (Some(left), None) => *link = Some(left),
                        (Some(left), Some(right)) => {
                            // The node keeps its place; only its key is
                            // replaced by the in-order successor's.
                            let (successor, rest) = Self::take_min(right);
                            node.key = successor;
                            node.left = Some(left);
                            node.right = rest;
                        }
                    }
                    true
                }
            },
        }
    }

    /// Unlinks the smallest node of the subtree and returns its key along
    /// with the remaining subtree. The smallest node has no left child, so
    /// its right child (if any) takes its place.
    fn take_min(mut node: Box<Self>) -> (K, Option<Box<Self>>) {
        match node.left.take() {
            Some(left) => {
                let (min, rest) = Self::take_min(left);
                node.left = rest;
                (min, Some(node))
            }
            None => {
                let Self { key, right, .. } = *node;
                (key, right)
            }
        }
    }

    /// Number of nodes on the left-only spine starting at this node, the
    /// node itself included.
    fn left_height(&self) -> usize {
        let mut height = 0;
        let mut node = Some(self);
        while let Some(n) = node {
            height += 1;
            node = n.left.as_deref();
        }
        height
    }

    /// Number of nodes on the right-only spine starting at this node, the
    /// node itself included.
    fn right_height(&self) -> usize {
        let mut height = 0;
        let mut node = Some(self);
        while let Some(n) = node {
            height += 1;
            node = n.right.as_deref();
        }
        height
    }

    fn count_nodes(link: Option<&Self>) -> usize {
        let Some(node) = link else {
            return 0;
        };

        let left = node.left_height();
        let right = node.right_height();
        if left == right {
            // Closed-form node count of a perfect tree of this height.
            (1usize << left) - 1
        } else {
            1 + Self::count_nodes(node.left.as_deref()) + Self::count_nodes(node.right.as_deref())
        }
    }

    fn depth_below(link: Option<&Self>) -> isize {
        match link {
            None => -1,
            Some(node) => {
                let left = Self::depth_below(node.left.as_deref());
                let right = Self::depth_below(node.right.as_deref());
                1 + left.max(right)
            }
        }
    }
}

/// A lazy in-order traversal of a [`Tree`], yielding keys in ascending
/// order. Created by [`Tree::iter`].
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

/// A lazy pre-order traversal of a [`Tree`]. Created by
/// [`Tree::pre_order`].
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.key)
    }
}

/// A lazy post-order traversal of a [`Tree`]. Created by
/// [`Tree::post_order`].
pub struct PostOrder<'a, K> {
    // The flag records whether the node's children were already expanded;
    // a node is yielded only the second time it is popped.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, children_done)) = self.stack.pop() {
            if children_done {
                return Some(&node.key);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }
}
