//! Splay tree with an implicit index.
//!
//! [`SplayTree`] keeps values ordered and also answers positional queries:
//! every node counts the nodes of its subtree, so the element at a given
//! rank is found by one descent. Accessed nodes are splayed to the root,
//! which keeps any sequence of `m` operations on `n` elements within
//! O(m log n).
//!
//! Positions count from the largest element: position `0` is the maximum
//! and `len() - 1` the minimum.
//!
//! Nodes are stored in a `Vec` arena and linked by `Option<u32>` indices.
//! The arena-level building blocks are public as well:
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`SizedNode`] link traits |
//! [`splay`](mod@splay) | `rotate_left`, `rotate_right`, `splay` |
//! [`util`] | counter-aware links, traversal, lookups by value and position |
//! [`util::split`](mod@util::split) | `split`, `merge`, `insert`, `remove` on raw roots |
//! [`util::validate`] | `assert_splay_tree` invariant checker |
//!
//! # Example
//!
//! ```
//! use implicit_splay::SplayTree;
//!
//! let mut tree = SplayTree::new();
//! for v in [5, 3, 8, 1] {
//!     tree.insert(v);
//! }
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.value_at(0), Ok(&8));
//! assert_eq!(tree.value_at(3), Ok(&1));
//!
//! assert_eq!(tree.remove(0), Ok(8));
//! assert_eq!(tree.value_at(0), Ok(&5));
//! ```

pub mod error;
pub mod node;
pub mod options;
pub mod print;
pub mod splay;
pub mod tree;
pub mod types;
pub mod util;

pub use error::SplayError;
pub use node::{NodeRef, SplayNode};
pub use options::SplayOptions;
pub use splay::{rotate_left, rotate_right, splay};
pub use tree::SplayTree;
pub use types::{Node, SizedNode};
