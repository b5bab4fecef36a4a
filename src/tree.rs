use std::fmt::Debug;

use tracing::trace;

use crate::{
    iter::{IntoIter, Iter},
    node::{height, remove_recurse, Node},
};

/// An ordered set of unique values, stored in a self-balancing AVL binary
/// search tree.
///
/// Inserting a value already present, or removing a value that is not
/// present, leaves the tree unchanged.
#[derive(Clone)]
pub struct AvlTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self {
            root: Default::default(),
            len: 0,
        }
    }
}

impl<T> AvlTree<T> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree.
    ///
    /// An empty tree has a height of 0, and a tree containing a single value
    /// has a height of 1.
    pub fn height(&self) -> u8 {
        height(self.root.as_deref())
    }

    /// Returns the value held in the root node of the tree, if any.
    pub fn root(&self) -> Option<&T> {
        self.root.as_deref().map(|v| v.value())
    }

    /// Remove all values from the tree.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Iterate over the values in the tree in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Returns all the values in the tree in ascending order.
    ///
    /// The returned [`Vec`] is a snapshot of the tree contents at the time of
    /// the call.
    pub fn inorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub(crate) fn root_node(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Insert `value` into the tree.
    ///
    /// Returns true if the value was added, or false if the tree already
    /// contained an equal value (in which case the tree is not modified).
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = match self.root {
            Some(ref mut v) => v.insert(value).is_some(),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                true
            }
        };

        if inserted {
            self.len += 1;
        } else {
            trace!("duplicate value not inserted");
        }

        inserted
    }

    /// Returns true if the tree contains `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.root
            .as_ref()
            .map(|v| v.contains(value))
            .unwrap_or_default()
    }

    /// Remove `value` from the tree, returning true if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Remove `value` from the tree, returning the stored value if it was
    /// present.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let ret = remove_recurse(&mut self.root, value);

        match ret {
            Some(_) => self.len -= 1,
            None => trace!("value to remove not found"),
        }

        ret
    }
}

impl<T> Debug for AvlTree<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for AvlTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for AvlTree<T> where T: Eq {}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<T> Extend<T> for AvlTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T> IntoIterator for AvlTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
