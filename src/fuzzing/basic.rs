use std::collections::HashMap;

use itertools::Itertools;

use super::{qc, Operation};
use crate::{V4Cidr, V4Trie};

qc!(new, _new);
fn _new(list: Vec<(V4Cidr, i32)>) -> bool {
    let mut trie = V4Trie::new();
    let mut hmap = HashMap::new();

    for (p, t) in list {
        trie.insert(p, t);
        hmap.insert(p, t);
    }

    // assert that the iterator of both is the same
    trie.into_iter().eq(hmap.into_iter().sorted())
}

qc!(new_mods, _new_mods);
fn _new_mods(list: Vec<Operation<i32>>) -> bool {
    let mut trie = V4Trie::new();
    let mut hmap = HashMap::new();

    for op in list {
        match op {
            Operation::Add(p, t) => {
                trie.insert(p, t);
                hmap.insert(p, t);
            }
            Operation::Remove(p) => {
                trie.remove(&p);
                hmap.remove(&p);
            }
        }
    }

    // assert that the iterator of both is the same
    trie.into_iter().eq(hmap.into_iter().sorted())
}

qc!(new_mods_entry, _new_mods_entry);
fn _new_mods_entry(list: Vec<Operation<i32>>) -> bool {
    let mut trie = V4Trie::new();
    let mut hmap = HashMap::new();

    for op in list {
        match op {
            Operation::Add(p, t) => {
                let _ = trie.entry(p).insert(t);
                hmap.insert(p, t);
            }
            Operation::Remove(p) => {
                trie.remove(&p);
                hmap.remove(&p);
            }
        }
    }

    // assert that the iterator of both is the same
    trie.into_iter().eq(hmap.into_iter().sorted())
}

qc!(equality, _equality);
fn _equality(list: Vec<Operation<i32>>) -> bool {
    let mut trie = V4Trie::default();

    for op in list {
        match op {
            Operation::Add(p, t) => {
                trie.insert(p, t);
            }
            Operation::Remove(p) => {
                trie.remove(&p);
            }
        }
    }

    let clone = trie.clone().into_iter().collect::<V4Trie<_>>();

    trie == clone && trie.len() == clone.len() && trie.is_empty() == clone.is_empty()
}

qc!(canonical_shape, _canonical_shape);
fn _canonical_shape(list: Vec<Operation<i32>>) -> bool {
    let mut trie = V4Trie::new();

    for op in list {
        match op {
            Operation::Add(p, t) => {
                trie.insert(p, t);
            }
            Operation::Remove(p) => {
                trie.remove(&p);
            }
        }
    }

    // whatever was inserted and removed, the tree must look as if the current contents had been
    // inserted into a fresh trie
    let fresh = V4Trie::from_iter(trie.to_vec());
    format!("{:?}", trie) == format!("{:?}", fresh)
}

qc!(drain, _drain);
fn _drain(list: Vec<Operation<i32>>) -> bool {
    let mut trie = V4Trie::new();

    for op in list {
        match op {
            Operation::Add(p, t) => {
                trie.insert(p, t);
            }
            Operation::Remove(p) => {
                trie.remove(&p);
            }
        }
    }

    // removing every remaining entry must return the arena to just the root node
    for (p, _) in trie.to_vec() {
        if trie.remove(&p).is_none() {
            return false;
        }
    }
    trie.is_empty() && trie.len() == 0 && trie.node_count() == 1
}

qc!(rebuild_roundtrip, _rebuild_roundtrip);
fn _rebuild_roundtrip(trie: V4Trie<i32>) -> bool {
    V4Trie::from_iter(trie.to_vec()) == trie
}

qc!(len_tracks_contents, _len_tracks_contents);
fn _len_tracks_contents(list: Vec<Operation<i32>>) -> bool {
    let mut trie = V4Trie::new();
    let mut hmap = HashMap::new();

    for op in list {
        match op {
            Operation::Add(p, t) => {
                trie.insert(p, t);
                hmap.insert(p, t);
            }
            Operation::Remove(p) => {
                trie.remove(&p);
                hmap.remove(&p);
            }
        }
        if trie.len() != hmap.len() {
            return false;
        }
    }
    true
}
