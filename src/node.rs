use std::cmp::Ordering;

use tracing::trace;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, and an absent child is considered to have a
    /// height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `value` into the subtree rooted at `self`, rebalancing on the way
    /// back up.
    ///
    /// Returns [`None`] if `value` already exists in the subtree, otherwise the
    /// [`Ordering`] of `value` relative to the value held in `self`
    /// ([`Ordering::Equal`] denotes a newly created leaf).
    pub(crate) fn insert(self: &mut Box<Self>, value: T) -> Option<Ordering>
    where
        T: Ord,
    {
        let dir = value.cmp(&self.value);
        let child = match dir {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return None,
            Ordering::Greater => &mut self.right,
        };

        // The position of the value relative to the child subtree root, which
        // selects between the single and double rotation cases below.
        let child_dir = match child {
            Some(v) => v.insert(value)?,
            None => {
                *child = Some(Box::new(Self::new(value)));
                Ordering::Equal
            }
        };

        update_height(self);

        match (balance(self), child_dir) {
            // Left-Left
            (2.., Ordering::Less) => rotate_right(self),
            // Left-Right
            (2.., Ordering::Greater) => {
                rotate_left(self.left.as_mut().unwrap());
                rotate_right(self);
            }
            // Right-Right
            (..=-2, Ordering::Greater) => rotate_left(self),
            // Right-Left
            (..=-2, Ordering::Less) => {
                rotate_right(self.right.as_mut().unwrap());
                rotate_left(self);
            }
            (-1..=1, _) => { /* The tree is well balanced */ }
            // A freshly linked leaf cannot skew its parent by more than 1.
            _ => unreachable!(),
        }

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(balance(self).abs() <= 1);

        Some(dir)
    }

    pub(crate) fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut ptr = Some(self);
        while let Some(n) = ptr {
            ptr = match value.cmp(&n.value) {
                Ordering::Less => n.left(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right(),
            };
        }
        false
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

/// Return the height of `n`, or 0 if `n` is absent.
pub(crate) fn height<T>(n: Option<&Node<T>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<T>(n: &mut Node<T>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<T>(n: &Node<T>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<T>(x: &mut Box<Node<T>>) {
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    // "p" is now the old subtree root, and must be updated before the new root
    // as it has become its child.
    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);

    trace!(height = x.height, "rotate left");
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<T>(y: &mut Box<Node<T>>) {
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);

    trace!(height = y.height, "rotate right");
}

/// Remove `value` from the subtree rooted at `node`, if it exists, returning
/// the owned value.
///
/// Every node on the path back up to `node` is rebalanced after the removal.
pub(crate) fn remove_recurse<T>(node: &mut Option<Box<Node<T>>>, value: &T) -> Option<T>
where
    T: Ord,
{
    let n = node.as_mut()?;

    let removed = match value.cmp(&n.value) {
        Ordering::Less => remove_recurse(&mut n.left, value)?,
        Ordering::Greater => remove_recurse(&mut n.right, value)?,
        Ordering::Equal if n.left.is_some() && n.right.is_some() => {
            // This node has two children.
            //
            // The in-order successor (the minimum value of the right subtree)
            // is detached and takes the place of the value being removed,
            // leaving this node linked into the tree.
            let successor = extract_subtree_min(&mut n.right)?;
            std::mem::replace(&mut n.value, successor)
        }
        // Otherwise this node has at most one child, which replaces it.
        Ordering::Equal => return unlink(node),
    };

    rebalance_after_remove(n);
    Some(removed)
}

/// Detaches the minimum value in the subtree rooted at `node`, linking the
/// right subtree of the node that held it (if any) in its place.
fn extract_subtree_min<T>(node: &mut Option<Box<Node<T>>>) -> Option<T> {
    let n = node.as_mut()?;

    if n.left.is_none() {
        // "n" is the end of the left edge.
        return unlink(node);
    }

    let v = extract_subtree_min(&mut n.left);
    rebalance_after_remove(n);
    v
}

/// Replace the node at `node` with its only child (if any), returning the
/// value of the unlinked node.
fn unlink<T>(node: &mut Option<Box<Node<T>>>) -> Option<T> {
    let mut old = node.take()?;

    // Invariant: the node being unlinked has at most one subtree.
    debug_assert!(old.left.is_none() || old.right.is_none());

    *node = old.left.take().or_else(|| old.right.take());
    Some(old.value)
}

fn rebalance_after_remove<T>(v: &mut Box<Node<T>>) {
    // Recompute the height of this node from the (already correct) children.
    update_height(v);

    // And rebalance the subtree, selecting the rotation using the balance of
    // the heavier child.
    match balance(v) {
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(v);
        }
        (2..) => {
            if let Some(left) = v.left.as_mut() {
                rotate_left(left);
            }
            rotate_right(v);
        }
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(v);
        }
        (..=-2) => {
            if let Some(right) = v.right.as_mut() {
                rotate_right(right);
            }
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a value.
    debug_assert!(balance(v).abs() <= 1);
}
