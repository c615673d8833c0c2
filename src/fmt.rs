//! Formatting implementation for the V4Trie.

use std::fmt::{Debug, Formatter, Result};

use crate::V4Trie;

impl<T: Debug> Debug for V4Trie<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        DebugV4Trie(self, 0).fmt(f)
    }
}

struct DebugV4Trie<'a, T>(&'a V4Trie<T>, usize);

impl<T: Debug> Debug for DebugV4Trie<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let trie = self.0;
        let idx = self.1;
        let node = &trie.table[idx];
        match (node.value.as_ref(), node.left, node.right) {
            (None, None, None) => node.prefix.fmt(f),
            (None, None, Some(child)) | (None, Some(child), None) => f
                .debug_map()
                .entry(&node.prefix, &Self(trie, child))
                .finish(),
            (None, Some(left), Some(right)) => f
                .debug_map()
                .entry(&node.prefix, &(Self(trie, left), Self(trie, right)))
                .finish(),
            (Some(v), None, None) => f.debug_map().entry(&node.prefix, v).finish(),
            (Some(v), None, Some(child)) | (Some(v), Some(child), None) => f
                .debug_map()
                .entry(&node.prefix, &(v, Self(trie, child)))
                .finish(),
            (Some(v), Some(left), Some(right)) => f
                .debug_map()
                .entry(&node.prefix, &(v, Self(trie, left), Self(trie, right)))
                .finish(),
        }
    }
}
