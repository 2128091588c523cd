//! An interactive Binary Search Tree (BST) driven by a console menu.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! The tree in this crate stores each key at most once and performs no
//! rebalancing, so its shape depends on the order of insertion. BSTs
//! naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree; [`tree::Tree::iter`] does
//! exactly that.
//!
//! The [`tree`] module holds the data structure itself. The [`menu`] module
//! implements the numbered console menu that drives it; the `bstree` binary
//! wires that menu to stdin and stdout.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod menu;
pub mod tree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
