// File: crates/btree-bench/src/tree.rs
// Summary: Order-3 B-tree of string keys; splits full nodes on the way down when inserting,
// borrows from or merges with siblings on the way down when deleting.

/// Minimum degree. Every node except the root holds `ORDER - 1 ..= 2 * ORDER - 1` keys.
pub const ORDER: usize = 3;
pub const MAX_KEYS: usize = 2 * ORDER - 1;
pub const MIN_KEYS: usize = ORDER - 1;

#[derive(Clone, Debug, Default)]
struct Node {
    keys: Vec<String>,
    /// Empty for leaves, otherwise `keys.len() + 1` subtrees.
    children: Vec<Node>,
}

impl Node {
    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn is_full(&self) -> bool {
        self.keys.len() == MAX_KEYS
    }

    /// Split the full child at `index` in two, moving its median key up into `self`.
    fn split_child(&mut self, index: usize) {
        let child = &mut self.children[index];
        let keys = child.keys.split_off(ORDER);
        let children = if child.is_leaf() { Vec::new() } else { child.children.split_off(ORDER) };
        let median = child.keys.remove(ORDER - 1);
        self.keys.insert(index, median);
        self.children.insert(index + 1, Node { keys, children });
    }

    fn insert_non_full(&mut self, key: String, nodes: &mut usize) {
        // equal keys go after the ones already stored
        let mut i = self.keys.partition_point(|k| *k <= key);
        if self.is_leaf() {
            self.keys.insert(i, key);
            return;
        }
        if self.children[i].is_full() {
            self.split_child(i);
            *nodes += 1;
            if key > self.keys[i] {
                i += 1;
            }
        }
        self.children[i].insert_non_full(key, nodes);
    }

    /// Remove one occurrence of `key` from this subtree. A child is topped up to at
    /// least `ORDER` keys before the search descends into it.
    fn remove(&mut self, key: &str, nodes: &mut usize) -> bool {
        let idx = self.keys.partition_point(|k| k.as_str() < key);
        if self.keys.get(idx).is_some_and(|k| k == key) {
            if self.is_leaf() {
                self.keys.remove(idx);
            } else {
                self.remove_from_internal(idx, nodes);
            }
            return true;
        }
        if self.is_leaf() {
            return false;
        }

        let was_last = idx == self.keys.len();
        if self.children[idx].keys.len() < ORDER {
            self.fill_child(idx, nodes);
        }
        // merging the last child into its left sibling shifts it one slot left
        if was_last && idx > self.keys.len() {
            self.children[idx - 1].remove(key, nodes)
        } else {
            self.children[idx].remove(key, nodes)
        }
    }

    fn remove_from_internal(&mut self, idx: usize, nodes: &mut usize) {
        if self.children[idx].keys.len() >= ORDER {
            let pred = self.children[idx].last_key().to_owned();
            self.children[idx].remove(&pred, nodes);
            self.keys[idx] = pred;
        } else if self.children[idx + 1].keys.len() >= ORDER {
            let succ = self.children[idx + 1].first_key().to_owned();
            self.children[idx + 1].remove(&succ, nodes);
            self.keys[idx] = succ;
        } else {
            let key = self.keys[idx].clone();
            self.merge_children(idx, nodes);
            self.children[idx].remove(&key, nodes);
        }
    }

    fn last_key(&self) -> &str {
        let mut node = self;
        while let Some(last) = node.children.last() {
            node = last;
        }
        node.keys.last().map_or("", String::as_str)
    }

    fn first_key(&self) -> &str {
        let mut node = self;
        while let Some(first) = node.children.first() {
            node = first;
        }
        node.keys.first().map_or("", String::as_str)
    }

    /// Give the child at `idx` one more key, from a sibling with keys to spare or by merging.
    fn fill_child(&mut self, idx: usize, nodes: &mut usize) {
        if idx > 0 && self.children[idx - 1].keys.len() > MIN_KEYS {
            self.borrow_from_prev(idx);
        } else if idx < self.keys.len() && self.children[idx + 1].keys.len() > MIN_KEYS {
            self.borrow_from_next(idx);
        } else if idx < self.keys.len() {
            self.merge_children(idx, nodes);
        } else {
            self.merge_children(idx - 1, nodes);
        }
    }

    /// Rotate right: separator moves down into `children[idx]`, left sibling's last key moves up.
    fn borrow_from_prev(&mut self, idx: usize) {
        let (left, right) = self.children.split_at_mut(idx);
        let sibling = &mut left[idx - 1];
        let child = &mut right[0];

        let Some(up) = sibling.keys.pop() else { return };
        let down = std::mem::replace(&mut self.keys[idx - 1], up);
        child.keys.insert(0, down);
        if let Some(subtree) = sibling.children.pop() {
            child.children.insert(0, subtree);
        }
    }

    /// Rotate left: separator moves down into `children[idx]`, right sibling's first key moves up.
    fn borrow_from_next(&mut self, idx: usize) {
        let (left, right) = self.children.split_at_mut(idx + 1);
        let child = &mut left[idx];
        let sibling = &mut right[0];
        if sibling.keys.is_empty() {
            return;
        }

        let up = sibling.keys.remove(0);
        let down = std::mem::replace(&mut self.keys[idx], up);
        child.keys.push(down);
        if !sibling.is_leaf() {
            child.children.push(sibling.children.remove(0));
        }
    }

    /// Fold `children[idx + 1]` and the separator between them into `children[idx]`.
    fn merge_children(&mut self, idx: usize, nodes: &mut usize) {
        let sibling = self.children.remove(idx + 1);
        let separator = self.keys.remove(idx);
        let child = &mut self.children[idx];
        child.keys.push(separator);
        child.keys.extend(sibling.keys);
        child.children.extend(sibling.children);
        *nodes = nodes.saturating_sub(1);
    }
}

/// B-tree multiset of strings. Duplicate keys are kept; `remove` drops one occurrence.
#[derive(Clone, Debug)]
pub struct BTree {
    root: Node,
    node_count: usize,
    len: usize,
}

impl Default for BTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BTree {
    /// An empty tree is a single empty leaf, so it already counts one node.
    pub fn new() -> Self {
        Self { root: Node::default(), node_count: 1, len: 0 }
    }

    /// Number of keys stored, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Nodes currently allocated, updated on every split, merge and root change.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Levels from the root down to the leaves; 1 for a lone root.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &self.root;
        while let Some(first) = node.children.first() {
            height += 1;
            node = first;
        }
        height
    }

    pub fn insert(&mut self, key: impl Into<String>) {
        if self.root.is_full() {
            let old_root = std::mem::take(&mut self.root);
            self.root.children.push(old_root);
            self.root.split_child(0);
            // new root plus the split-off half
            self.node_count += 2;
        }
        self.root.insert_non_full(key.into(), &mut self.node_count);
        self.len += 1;
    }

    /// Remove one occurrence of `key`. Returns false when the key is absent.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.root.remove(key, &mut self.node_count);
        if self.root.keys.is_empty() && !self.root.is_leaf() {
            self.root = self.root.children.remove(0);
            self.node_count -= 1;
        }
        if removed {
            self.len -= 1;
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(keys: &[&str]) -> Node {
        Node { keys: keys.iter().map(|k| k.to_string()).collect(), children: Vec::new() }
    }

    fn internal(keys: &[&str], children: Vec<Node>) -> Node {
        Node { keys: keys.iter().map(|k| k.to_string()).collect(), children }
    }

    fn keys_of(node: &Node) -> Vec<&str> {
        node.keys.iter().map(String::as_str).collect()
    }

    impl BTree {
        fn contains(&self, key: &str) -> bool {
            let mut node = &self.root;
            loop {
                let idx = node.keys.partition_point(|k| k.as_str() < key);
                if node.keys.get(idx).is_some_and(|k| k == key) {
                    return true;
                }
                match node.children.get(idx) {
                    Some(child) => node = child,
                    None => return false,
                }
            }
        }

        fn in_order(&self) -> Vec<&str> {
            fn walk<'a>(node: &'a Node, out: &mut Vec<&'a str>) {
                for (i, key) in node.keys.iter().enumerate() {
                    if let Some(child) = node.children.get(i) {
                        walk(child, out);
                    }
                    out.push(key);
                }
                if let Some(last) = node.children.get(node.keys.len()) {
                    walk(last, out);
                }
            }
            let mut out = Vec::new();
            walk(&self.root, &mut out);
            out
        }

        /// Panics unless every structural invariant holds.
        fn assert_valid(&self) {
            fn check(node: &Node, is_root: bool, depth: usize, leaf_depth: &mut Option<usize>) -> usize {
                assert!(node.keys.len() <= MAX_KEYS, "overfull node {:?}", node.keys);
                if !is_root {
                    assert!(node.keys.len() >= MIN_KEYS, "underfull node {:?}", node.keys);
                }
                if node.is_leaf() {
                    match *leaf_depth {
                        Some(d) => assert_eq!(d, depth, "leaves at different depths"),
                        None => *leaf_depth = Some(depth),
                    }
                    return 1;
                }
                assert_eq!(node.children.len(), node.keys.len() + 1);
                1 + node.children.iter().map(|c| check(c, false, depth + 1, leaf_depth)).sum::<usize>()
            }
            let nodes = check(&self.root, true, 0, &mut None);
            assert_eq!(nodes, self.node_count, "tracked node count drifted");

            let keys = self.in_order();
            assert_eq!(keys.len(), self.len);
            assert!(keys.windows(2).all(|w| w[0] <= w[1]), "keys out of order: {keys:?}");
        }
    }

    #[test]
    fn split_child_moves_median_up() {
        let mut parent = internal(&[], vec![leaf(&["a", "b", "c", "d", "e"])]);
        parent.split_child(0);
        assert_eq!(keys_of(&parent), vec!["c"]);
        assert_eq!(keys_of(&parent.children[0]), vec!["a", "b"]);
        assert_eq!(keys_of(&parent.children[1]), vec!["d", "e"]);
    }

    #[test]
    fn split_child_carries_subtrees() {
        let grandchildren: Vec<Node> = ["0", "1", "2", "3", "4", "5"].iter().map(|k| leaf(&[k])).collect();
        let mut parent = internal(&[], vec![internal(&["a", "b", "c", "d", "e"], grandchildren)]);
        parent.split_child(0);
        assert_eq!(parent.children[0].children.len(), 3);
        assert_eq!(parent.children[1].children.len(), 3);
        assert_eq!(keys_of(&parent.children[1].children[0]), vec!["3"]);
    }

    #[test]
    fn sixth_insert_splits_the_root() {
        let mut tree = BTree::new();
        for k in ["a", "b", "c", "d", "e"] {
            tree.insert(k);
        }
        assert_eq!((tree.height(), tree.node_count()), (1, 1));
        tree.insert("f");
        assert_eq!((tree.height(), tree.node_count()), (2, 3));
        assert_eq!(keys_of(&tree.root), vec!["c"]);
        tree.assert_valid();
    }

    #[test]
    fn borrow_from_prev_rotates_through_parent() {
        let mut parent = internal(&["m"], vec![leaf(&["a", "b", "c"]), leaf(&["x", "y"])]);
        let mut nodes = 3;
        parent.fill_child(1, &mut nodes);
        assert_eq!(keys_of(&parent), vec!["c"]);
        assert_eq!(keys_of(&parent.children[0]), vec!["a", "b"]);
        assert_eq!(keys_of(&parent.children[1]), vec!["m", "x", "y"]);
        assert_eq!(nodes, 3);
    }

    #[test]
    fn borrow_from_next_rotates_through_parent() {
        let mut parent = internal(&["c"], vec![leaf(&["a", "b"]), leaf(&["d", "e", "f"])]);
        let mut nodes = 3;
        parent.fill_child(0, &mut nodes);
        assert_eq!(keys_of(&parent), vec!["d"]);
        assert_eq!(keys_of(&parent.children[0]), vec!["a", "b", "c"]);
        assert_eq!(keys_of(&parent.children[1]), vec!["e", "f"]);
        assert_eq!(nodes, 3);
    }

    #[test]
    fn merge_when_both_siblings_are_minimal() {
        let mut parent = internal(&["c", "f"], vec![leaf(&["a", "b"]), leaf(&["d", "e"]), leaf(&["g", "h"])]);
        let mut nodes = 4;
        parent.fill_child(0, &mut nodes);
        assert_eq!(keys_of(&parent), vec!["f"]);
        assert_eq!(keys_of(&parent.children[0]), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(parent.children.len(), 2);
        assert_eq!(nodes, 3);
    }

    #[test]
    fn last_child_merges_into_left_sibling() {
        let mut parent = internal(&["c", "f"], vec![leaf(&["a", "b"]), leaf(&["d", "e"]), leaf(&["g", "h"])]);
        let mut nodes = 4;
        parent.fill_child(2, &mut nodes);
        assert_eq!(keys_of(&parent), vec!["c"]);
        assert_eq!(keys_of(&parent.children[1]), vec!["d", "e", "f", "g", "h"]);
        assert_eq!(nodes, 3);
    }

    #[test]
    fn removing_down_to_nothing_shrinks_the_root() {
        let words: Vec<String> = (0..200).map(|i| format!("w{:03}", (i * 37) % 200)).collect();
        let mut tree = BTree::new();
        for w in &words {
            tree.insert(w.as_str());
            tree.assert_valid();
        }
        assert!(tree.height() >= 3);

        for w in words.iter().rev() {
            assert!(tree.remove(w), "{w} missing");
            tree.assert_valid();
        }
        assert!(tree.is_empty());
        assert_eq!((tree.height(), tree.node_count()), (1, 1));
    }

    #[test]
    fn duplicates_are_removed_one_at_a_time() {
        let mut tree = BTree::new();
        for k in ["the", "a", "the", "of", "the", "b", "c", "d"] {
            tree.insert(k);
        }
        tree.assert_valid();
        assert_eq!(tree.len(), 8);

        assert!(tree.remove("the"));
        assert!(tree.remove("the"));
        assert!(tree.contains("the"));
        assert!(tree.remove("the"));
        assert!(!tree.contains("the"));
        assert!(!tree.remove("the"));
        assert_eq!(tree.len(), 5);
        tree.assert_valid();
    }

    #[test]
    fn removing_absent_key_leaves_tree_valid() {
        let mut tree = BTree::new();
        for i in 0..50 {
            tree.insert(format!("k{i:02}"));
        }
        let before = tree.len();
        assert!(!tree.remove("zzz"));
        assert!(!tree.remove(""));
        assert_eq!(tree.len(), before);
        tree.assert_valid();
    }
}
