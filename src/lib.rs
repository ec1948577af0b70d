//! A red-black order-statistic tree for Rust.
//!
//! This crate provides [`RbTree`], a sorted multiset backed by a red-black tree
//! whose nodes also record the size of their subtree. Besides the usual ordered
//! operations, every node knows its position in sorted order, which makes rank
//! queries as cheap as lookups:
//!
//! - [`select`](RbTree::select) - Get the node at a given one-based rank
//! - [`rank_of`](RbTree::rank_of) - Get the rank of a key
//! - [`NodeRef::successor`] / [`NodeRef::predecessor`] - Step through the order from any node
//! - Indexing by [`Rank`] - e.g., `tree[Rank(1)]` for the smallest key
//!
//! # Example
//!
//! ```
//! use rbos_tree::{RbTree, Rank};
//!
//! let mut scores = RbTree::new();
//! for score in [85, 100, 92, 85] {
//!     scores.insert(score);
//! }
//!
//! // Duplicates are kept.
//! assert_eq!(scores.len(), 4);
//!
//! // Order-statistic operations (O(log n))
//! let median = scores.select(2).unwrap();
//! assert_eq!(*median.key(), 85);
//! assert_eq!(median.successor().map(|n| *n.key()), Some(92));
//!
//! assert_eq!(scores.rank_of(&92), Some(3));
//! assert_eq!(scores[Rank(4)], 100);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Multiset semantics** - Equal keys are stored side by side; removal takes the first match
//! - **O(log n) rank operations** - Subtree sizes are kept exact through every rotation
//! - **No unsafe code** - Nodes live in an arena and link to each other by index
//!
//! # Implementation
//!
//! Nodes are stored in a slot arena and refer to their parent and children by
//! compact handles. An absent link stands in for the classic shared black
//! sentinel, so rotation and rebalancing code never special-cases leaves.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod rb_tree;

pub use error::InvariantViolation;
pub use order_statistic::Rank;
pub use rb_tree::{NodeRef, RbTree};
