//! A red-black order-statistic key set for Rust.
//!
//! This crate provides [`RankSet`], an ordered set built on a red-black
//! tree with two order-statistic queries on top of insertion:
//!
//! - [`select`](RankSet::select) - the k-th smallest key (1-indexed)
//! - [`count_less`](RankSet::count_less) - how many keys are strictly less
//!   than a probe value
//!
//! Unlike augmented order-statistic trees, nodes carry no subtree-size
//! counters: both queries recompute what they need by traversal, trading
//! query speed for a smaller node and a simpler insert path. Keys are
//! unique; inserting a key that is already present fails with
//! [`DuplicateKey`] and leaves the set untouched. There is no removal:
//! the set only grows until it is cleared or dropped as a whole.
//!
//! # Example
//!
//! ```
//! use rank_tree::RankSet;
//!
//! let mut set = RankSet::new();
//! set.insert(8)?;
//! set.insert(2)?;
//! set.insert(-1)?;
//!
//! assert_eq!(set.select(1), Ok(&-1));
//! assert_eq!(set.select(2), Ok(&2));
//! assert_eq!(set.count_less(&3), 2);
//! assert!(set.insert(2).is_err());
//! # Ok::<(), rank_tree::DuplicateKey>(())
//! ```
//!
//! # Implementation
//!
//! Nodes live in an append-only arena and link to each other through
//! stable 4-byte handles (left, right, and a parent back-link used while
//! rebalancing), so rotations relink in O(1) without raw pointers and a
//! structural copy of the whole set is a plain arena clone.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

extern crate alloc;

mod error;
mod rank_set;
mod raw;

pub use error::{DuplicateKey, OutOfRange};
pub use rank_set::{Rank, RankSet};
