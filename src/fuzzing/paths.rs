use std::collections::HashMap;

use itertools::Itertools;

use super::{qc, Operation};
use crate::{V4Cidr, V4Trie};

fn build(list: Vec<Operation<i32>>) -> (V4Trie<i32>, HashMap<V4Cidr, i32>) {
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
    (trie, hmap)
}

qc!(lookup_path_is_exactly_the_covering_chain, _covering_chain);
fn _covering_chain(input: (Vec<Operation<i32>>, V4Cidr)) -> bool {
    let (list, query) = input;
    let (trie, hmap) = build(list);

    // every stored prefix containing the query, from the least to the most specific
    let expected = hmap
        .iter()
        .filter(|(p, _)| p.contains(&query))
        .map(|(p, t)| (p.canonical(), *t))
        .sorted_by_key(|(p, _)| p.prefix_len())
        .collect::<Vec<_>>();

    let path = trie
        .lookup_path(&query)
        .into_iter()
        .map(|(p, t)| (*p, *t))
        .collect::<Vec<_>>();

    path == expected
}

qc!(lookup_path_of_present_keys, _present_keys);
fn _present_keys(list: Vec<Operation<i32>>) -> bool {
    let (trie, hmap) = build(list);

    for (p, t) in &hmap {
        let path = trie.lookup_path(p);
        // the entry itself terminates its own path
        if path.last() != Some(&(&p.canonical(), t)) {
            return false;
        }
        // everything on the path is a stored ancestor, in strictly descending scope
        let mut last_len = None;
        for (q, v) in path {
            if !q.contains(p) || hmap.get(q) != Some(v) {
                return false;
            }
            if last_len.map(|l| l >= q.prefix_len()).unwrap_or(false) {
                return false;
            }
            last_len = Some(q.prefix_len());
        }
    }
    true
}

qc!(common_prefix_contains_both, _common_prefix);
fn _common_prefix(input: (V4Cidr, V4Cidr)) -> bool {
    let (a, b) = input;
    let cp = a.common_prefix(&b);

    // symmetric, canonical, and an ancestor of (or equal to) both inputs
    if cp != b.common_prefix(&a) || cp != cp.canonical() {
        return false;
    }
    if !cp.contains(&a) || !cp.contains(&b) {
        return false;
    }
    // never more specific than either input
    if cp.prefix_len() > a.prefix_len().min(b.prefix_len()) {
        return false;
    }
    // and maximal: one more bit of `a` no longer covers both
    if cp.prefix_len() < a.prefix_len().min(b.prefix_len()) {
        let longer = V4Cidr::new(a.network(), cp.prefix_len() + 1).unwrap();
        if longer.contains(&a) && longer.contains(&b) {
            return false;
        }
    }
    true
}

qc!(common_prefix_idempotent, _common_prefix_idempotent);
fn _common_prefix_idempotent(a: V4Cidr) -> bool {
    a.common_prefix(&a) == a.canonical()
}
