use std::fmt::{Display, Write};

use crate::{node::Node, AvlTree};

impl<T> AvlTree<T>
where
    T: Display,
{
    /// Render the tree structure for debugging, rotated 90° counter-clockwise.
    ///
    /// The right subtree of each node is printed above it and the left subtree
    /// below it, indented by depth, with each node labelled with its value and
    /// height:
    ///
    /// ```
    /// # use avltree::AvlTree;
    /// let t = [2, 1, 3].into_iter().collect::<AvlTree<_>>();
    ///
    /// assert_eq!(
    ///     t.print_tree(),
    ///     "   R: (3, h=1)\n\
    ///      Root: (2, h=2)\n   L: (1, h=1)\n"
    /// );
    /// ```
    ///
    /// An empty tree renders as an empty string.
    pub fn print_tree(&self) -> String {
        let mut buf = String::new();
        if let Some(root) = self.root_node() {
            recurse(root, 0, "Root", &mut buf);
        }
        buf
    }
}

fn recurse<T, W>(n: &Node<T>, level: usize, label: &str, buf: &mut W)
where
    W: Write,
    T: Display,
{
    if let Some(right) = n.right() {
        recurse(right, level + 1, "R", buf);
    }

    writeln!(
        buf,
        "{:indent$}{}: ({}, h={})",
        "",
        label,
        n.value(),
        n.height(),
        indent = level * 3
    )
    .unwrap();

    if let Some(left) = n.left() {
        recurse(left, level + 1, "L", buf);
    }
}
