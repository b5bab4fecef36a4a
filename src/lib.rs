//! An ordered set backed by a self-balancing [AVL] binary search tree.
//!
//! Values are kept unique and sorted, and the height of every subtree is
//! rebalanced after each insert or removal so that no node's left and right
//! subtree heights differ by more than 1.
//!
//! ```
//! use avltree::AvlTree;
//!
//! let mut t = AvlTree::default();
//!
//! t.insert(10);
//! t.insert(20);
//! t.insert(30);
//!
//! // Inserting a duplicate value is a no-op.
//! assert!(!t.insert(20));
//!
//! assert_eq!(t.root(), Some(&20));
//! assert_eq!(t.inorder_traversal(), [10, 20, 30]);
//!
//! // As is removing a value that does not exist.
//! assert!(t.remove(&20));
//! assert!(!t.remove(&20));
//!
//! assert_eq!(t.iter().collect::<Vec<_>>(), [&10, &30]);
//! ```
//!
//! [AVL]: https://en.wikipedia.org/wiki/AVL_tree

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::explicit_iter_loop,
    clippy::todo,
    missing_debug_implementations
)]

mod iter;
mod node;
mod print;
mod tree;

#[cfg(test)]
mod test_utils;

pub use iter::{IntoIter, Iter};
pub use tree::AvlTree;

