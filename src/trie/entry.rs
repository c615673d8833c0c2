//! Code for inserting elements and the entry pattern.

use super::{DirectionForInsert, Node, V4Trie};
use crate::V4Cidr;

/// A mutable view into a single entry in a trie, which may either be vacant or occupied.
pub enum Entry<'a, T> {
    /// The entry is not present in the tree.
    Vacant(VacantEntry<'a, T>),
    /// The entry is already present in the tree.
    Occupied(OccupiedEntry<'a, T>),
}

/// A mutable view into a missing entry. The information within this structure describes the path
/// towards the missing node, and how to insert it.
pub struct VacantEntry<'a, T> {
    pub(super) trie: &'a mut V4Trie<T>,
    pub(super) cidr: V4Cidr,
    pub(super) idx: usize,
    pub(super) direction: DirectionForInsert,
}

/// A mutable view into an occupied entry. An occupied entry represents a node that is already
/// present in the tree.
pub struct OccupiedEntry<'a, T> {
    pub(super) node: &'a mut Node<T>,
}

impl<'a, T> Entry<'a, T> {
    /// Get the value if it exists.
    ///
    /// ```
    /// # use cidr_trie::V4Trie;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie: V4Trie<u32> = V4Trie::new();
    /// trie.insert("192.168.1.0/24".parse()?, 1);
    /// assert_eq!(trie.entry("192.168.1.0/24".parse()?).get(), Some(&1));
    /// assert_eq!(trie.entry("192.168.2.0/24".parse()?).get(), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self) -> Option<&T> {
        match self {
            Entry::Vacant(_) => None,
            Entry::Occupied(e) => e.node.value.as_ref(),
        }
    }

    /// Get a mutable reference to the value if it exists.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Entry::Vacant(_) => None,
            Entry::Occupied(e) => e.node.value.as_mut(),
        }
    }

    /// Get the canonical prefix of the entry.
    pub fn key(&self) -> &V4Cidr {
        match self {
            Entry::Vacant(e) => &e.cidr,
            Entry::Occupied(e) => &e.node.prefix,
        }
    }

    /// Replace the value of the entry, returning the value that was stored before.
    ///
    /// ```
    /// # use cidr_trie::V4Trie;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie: V4Trie<u32> = V4Trie::new();
    /// trie.insert("192.168.1.0/24".parse()?, 1);
    /// assert_eq!(trie.entry("192.168.1.0/24".parse()?).insert(10), Some(1));
    /// assert_eq!(trie.entry("192.168.2.0/24".parse()?).insert(20), None);
    /// assert_eq!(trie.get(&"192.168.2.0/24".parse()?), Some(&20));
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(self, value: T) -> Option<T> {
        match self {
            Entry::Vacant(e) => {
                e._insert(value);
                None
            }
            Entry::Occupied(e) => e.node.value.replace(value),
        }
    }

    /// Ensure a value is in the entry by inserting the given default if empty, and return a
    /// mutable reference to the value.
    ///
    /// ```
    /// # use cidr_trie::V4Trie;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie: V4Trie<u32> = V4Trie::new();
    /// trie.insert("192.168.1.0/24".parse()?, 1);
    /// assert_eq!(trie.entry("192.168.1.0/24".parse()?).or_insert(10), &1);
    /// assert_eq!(trie.entry("192.168.2.0/24".parse()?).or_insert(20), &20);
    /// # Ok(())
    /// # }
    /// ```
    pub fn or_insert(self, default: T) -> &'a mut T {
        match self {
            Entry::Vacant(e) => e._insert(default).value.as_mut().unwrap(),
            Entry::Occupied(e) => e.node.value.get_or_insert(default),
        }
    }

    /// Ensure a value is in the entry by inserting the result of the default function if empty,
    /// and return a mutable reference to the value.
    pub fn or_insert_with<F: FnOnce() -> T>(self, default: F) -> &'a mut T {
        match self {
            Entry::Vacant(e) => e._insert(default()).value.as_mut().unwrap(),
            Entry::Occupied(e) => e.node.value.get_or_insert_with(default),
        }
    }

    /// Provide in-place mutable access to an occupied entry before any potential insert.
    ///
    /// ```
    /// # use cidr_trie::V4Trie;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie: V4Trie<u32> = V4Trie::new();
    /// trie.insert("192.168.1.0/24".parse()?, 1);
    /// assert_eq!(trie.entry("192.168.1.0/24".parse()?).and_modify(|x| *x += 1).get(), Some(&2));
    /// assert_eq!(trie.entry("192.168.2.0/24".parse()?).and_modify(|x| *x += 1).get(), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn and_modify<F: FnOnce(&mut T)>(self, f: F) -> Self {
        match self {
            Entry::Vacant(e) => Entry::Vacant(e),
            Entry::Occupied(e) => {
                e.node.value.as_mut().map(f);
                Entry::Occupied(e)
            }
        }
    }
}

impl<'a, T: Default> Entry<'a, T> {
    /// Ensure a value is in the entry by inserting the default value if empty, and return a
    /// mutable reference to the value.
    #[allow(clippy::unwrap_or_default)]
    pub fn or_default(self) -> &'a mut T {
        self.or_insert_with(Default::default)
    }
}

impl<T> OccupiedEntry<'_, T> {
    /// Get the canonical prefix of the entry.
    pub fn key(&self) -> &V4Cidr {
        &self.node.prefix
    }

    /// Get a reference to the value in the entry.
    pub fn get(&self) -> &T {
        self.node.value.as_ref().unwrap()
    }

    /// Get a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut T {
        self.node.value.as_mut().unwrap()
    }

    /// Replace the value in the entry, returning the old value.
    pub fn insert(self, value: T) -> T {
        self.node.value.replace(value).unwrap()
    }
}

impl<T> VacantEntry<'_, T> {
    /// Get the canonical prefix of the entry.
    pub fn key(&self) -> &V4Cidr {
        &self.cidr
    }
}

impl<'a, T> VacantEntry<'a, T> {
    /// Insert a value into the vacant entry, returning a mutable reference to it.
    pub fn insert(self, value: T) -> &'a mut T {
        self._insert(value).value.as_mut().unwrap()
    }

    /// Perform the insertion described by `self.direction`. Mirrors the arms of
    /// [`V4Trie::insert`], which resolved the direction for us.
    pub(super) fn _insert(self, value: T) -> &'a mut Node<T> {
        self.trie.count += 1;
        match self.direction {
            DirectionForInsert::Reached => {
                let node = &mut self.trie.table[self.idx];
                debug_assert!(node.value.is_none());
                node.value = Some(value);
                node
            }
            DirectionForInsert::NewLeaf { right } => {
                let new = self.trie.new_node(self.cidr, Some(value));
                self.trie.set_child(self.idx, new, right);
                &mut self.trie.table[new]
            }
            DirectionForInsert::NewChild { right, child_right } => {
                let new = self.trie.new_node(self.cidr, Some(value));
                let child = self.trie.set_child(self.idx, new, right).unwrap();
                self.trie.set_child(new, child, child_right);
                &mut self.trie.table[new]
            }
            DirectionForInsert::NewBranch {
                branch_prefix,
                right,
                cidr_right,
            } => {
                let branch = self.trie.new_node(branch_prefix, None);
                let new = self.trie.new_node(self.cidr, Some(value));
                let child = self.trie.set_child(self.idx, branch, right).unwrap();
                self.trie.set_child(branch, new, cidr_right);
                self.trie.set_child(branch, child, !cidr_right);
                &mut self.trie.table[new]
            }
            DirectionForInsert::Enter { .. } => unreachable!(),
        }
    }
}
