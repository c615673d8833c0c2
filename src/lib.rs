//! This crate provides a prefix tree for IPv4 CIDRs. Unlike a routing-table lookup structure, the
//! characteristic query of [`V4Trie`] is not a longest-prefix match but
//! [`V4Trie::lookup_path`]: it returns the *whole chain* of stored entries covering a queried
//! prefix, from the least to the most specific. Policy-matching consumers use this to evaluate
//! every CIDR-scoped rule that applies to an address, not only the most specific one.
//!
//! # Description of the Tree
//!
//! The tree is structured as follows: each node consists of a prefix, a container for a potential
//! value (`Option`), and two optional children. Adding a new child, or traversing into the tree,
//! looks at the most significant address bit that is **not** part of the node's own prefix. If it
//! is not set, we take the left branch, and otherwise, we take the right one. Nodes without a
//! value exist only where two subtrees diverge, and always have both children; removals splice
//! such nodes back out, so the tree after any sequence of operations is identical in shape to one
//! that only ever saw the insertions.
//!
//! Nodes live in an arena (`Vec`) and reference their children by index; a free-list recycles the
//! slots of removed nodes. Prefixes are canonicalized (host bits cleared) when they are stored, so
//! every prefix handed back out of the tree is canonical, no matter how sloppy the input was.
//!
//! # Traversals
//!
//! Any iteration over all elements of the tree is a depth-first traversal yielding elements
//! sorted by [`V4Cidr`] ordering: ascending by address, with shorter prefixes before the longer
//! ones they contain.
//!
//! # Operations on the tree
//!
//! The following are the computational complexities of the functions, where `n` is the number of
//! elements in the tree.
//!
//! | Operation                          | Complexity |
//! |------------------------------------|------------|
//! | `entry`, `insert`                  | `O(log n)` |
//! | `remove`                           | `O(log n)` |
//! | `get`, `get_mut`, `lookup_path`    | `O(log n)` |
//! | `clear` (calling `drop` on `T`)    | `O(n)`     |
//! | Operations on [`trie::Entry`]      | `O(1)`     |
//! | `len` and `is_empty`               | `O(1)`     |
//!
//! ```
//! # use cidr_trie::V4Trie;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut trie: V4Trie<&str> = V4Trie::new();
//! trie.insert("10.0.0.0/8".parse()?, "corp");
//! trie.insert("10.1.0.0/16".parse()?, "lab");
//! trie.insert("192.168.0.0/16".parse()?, "home");
//!
//! // every stored prefix covering 10.1.2.3/32, outermost first
//! let path = trie.lookup_path(&"10.1.2.3".parse()?);
//! assert_eq!(path.iter().map(|(_, v)| **v).collect::<Vec<_>>(), vec!["corp", "lab"]);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::collapsible_else_if)]
#![deny(missing_docs)]

mod cidr;
mod fmt;
#[cfg(feature = "serde")]
mod serde;

pub mod trie;

pub use cidr::{ParseCidrError, PrefixLenError, V4Cidr};
pub use trie::V4Trie;

/// Whether `child` belongs in the right (bit = 1) slot of a node holding `branch`.
#[inline(always)]
pub(crate) fn to_right(branch: &V4Cidr, child: &V4Cidr) -> bool {
    child.is_bit_set(branch.prefix_len())
}
