// Balanced search tree over triliteral roots
//
// An AVL tree with owned child links. Each node carries a root key plus a
// metadata record of derivative words generated from that root. Mutating
// operations rebalance on the way back up the recursion, so every node's
// balance factor stays within [-1, 1] and in-order traversal is strictly
// ascending.

use std::cmp::Ordering;

use sarf_core::Root;

// ---------------------------------------------------------------------------
// Node metadata
// ---------------------------------------------------------------------------

/// A derived word recorded against a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivative {
    /// The generated word.
    pub word: String,
    /// The pattern name it was generated with.
    pub pattern: String,
    /// How many times this (word, pattern) pair was generated.
    pub frequency: u32,
}

/// Metadata attached to each indexed root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootInfo {
    derivatives: Vec<Derivative>,
}

impl RootInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a derived word. A repeated (word, pattern) pair increments
    /// the existing record's frequency instead of duplicating it.
    pub fn add_derivative(&mut self, word: &str, pattern: &str) {
        if let Some(existing) = self
            .derivatives
            .iter_mut()
            .find(|d| d.word == word && d.pattern == pattern)
        {
            existing.frequency += 1;
            return;
        }
        self.derivatives.push(Derivative {
            word: word.to_string(),
            pattern: pattern.to_string(),
            frequency: 1,
        });
    }

    /// Remove recorded derivatives by word, optionally restricted to one
    /// pattern. Returns true if anything was removed.
    pub fn remove_derivative(&mut self, word: &str, pattern: Option<&str>) -> bool {
        let before = self.derivatives.len();
        self.derivatives
            .retain(|d| d.word != word || pattern.is_some_and(|p| d.pattern != p));
        self.derivatives.len() != before
    }

    pub fn derivatives(&self) -> &[Derivative] {
        &self.derivatives
    }

    pub fn derivative_count(&self) -> usize {
        self.derivatives.len()
    }

    pub fn clear_derivatives(&mut self) {
        self.derivatives.clear();
    }
}

// ---------------------------------------------------------------------------
// Tree structure
// ---------------------------------------------------------------------------

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    key: Root,
    info: RootInfo,
    height: i32,
    left: Link,
    right: Link,
}

impl Node {
    fn new(key: Root, info: RootInfo) -> Self {
        Node {
            key,
            info,
            height: 1,
            left: None,
            right: None,
        }
    }
}

/// Ordered index of triliteral roots backed by an AVL tree.
///
/// Keys are [`Root`] values, already normalized by construction, so the
/// tree's lexicographic order is the normalized order the engine requires.
#[derive(Debug, Default)]
pub struct RootIndex {
    root: Link,
    len: usize,
}

impl RootIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of roots in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree (0 for an empty tree).
    pub fn height(&self) -> usize {
        height(&self.root) as usize
    }

    /// Insert a root with its metadata.
    ///
    /// Returns `true` if the root was newly inserted, `false` if it was
    /// already present. Duplicate insertion keeps the first insertion's
    /// metadata; callers that want to merge do so via [`RootIndex::get_mut`].
    pub fn insert(&mut self, key: Root, info: RootInfo) -> bool {
        let mut added = false;
        self.root = Some(insert_node(self.root.take(), key, info, &mut added));
        if added {
            self.len += 1;
        }
        added
    }

    /// Look up a root's metadata.
    pub fn get(&self, key: &Root) -> Option<&RootInfo> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.info),
            }
        }
        None
    }

    /// Look up a root's metadata for mutation.
    pub fn get_mut(&mut self, key: &Root) -> Option<&mut RootInfo> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.info),
            }
        }
        None
    }

    /// Check whether a root is present.
    pub fn contains(&self, key: &Root) -> bool {
        self.get(key).is_some()
    }

    /// Remove a root. Returns `true` if it was present.
    ///
    /// A node with two children is replaced by its in-order successor;
    /// rebalancing then runs from the successor's original position upward.
    pub fn remove(&mut self, key: &Root) -> bool {
        let mut removed = false;
        self.root = remove_node(self.root.take(), key, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Lazy in-order iterator: roots in ascending order. Restartable --
    /// each call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Iterator over the root keys only, ascending.
    pub fn roots(&self) -> impl Iterator<Item = &Root> {
        self.iter().map(|(root, _)| root)
    }
}

impl<'a> IntoIterator for &'a RootIndex {
    type Item = (&'a Root, &'a RootInfo);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order traversal driven by an explicit node stack.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Root, &'a RootInfo);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((&node.key, &node.info))
    }
}

// ---------------------------------------------------------------------------
// AVL balancing
// ---------------------------------------------------------------------------

fn height(link: &Link) -> i32 {
    link.as_ref().map_or(0, |n| n.height)
}

fn update_height(node: &mut Node) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

fn balance_factor(node: &Node) -> i32 {
    height(&node.left) - height(&node.right)
}

fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let Some(mut x) = y.left.take() else { return y };
    y.left = x.right.take();
    update_height(&mut y);
    x.right = Some(y);
    update_height(&mut x);
    x
}

fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let Some(mut y) = x.right.take() else { return x };
    x.right = y.left.take();
    update_height(&mut x);
    y.left = Some(x);
    update_height(&mut y);
    y
}

/// Recompute the height of `node` and apply whichever of the four rotation
/// cases restores its balance factor to [-1, 1].
fn rebalance(mut node: Box<Node>) -> Box<Node> {
    update_height(&mut node);
    let balance = balance_factor(&node);
    if balance > 1 {
        // Left-right case: reduce to left-left first.
        if node.left.as_deref().map_or(0, balance_factor) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if balance < -1 {
        // Right-left case: reduce to right-right first.
        if node.right.as_deref().map_or(0, balance_factor) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

fn insert_node(link: Link, key: Root, info: RootInfo, added: &mut bool) -> Box<Node> {
    let mut node = match link {
        None => {
            *added = true;
            return Box::new(Node::new(key, info));
        }
        Some(node) => node,
    };
    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert_node(node.left.take(), key, info, added)),
        Ordering::Greater => node.right = Some(insert_node(node.right.take(), key, info, added)),
        // Already present: first insertion's metadata wins.
        Ordering::Equal => return node,
    }
    rebalance(node)
}

fn remove_node(link: Link, key: &Root, removed: &mut bool) -> Link {
    let mut node = link?;
    match key.cmp(&node.key) {
        Ordering::Less => node.left = remove_node(node.left.take(), key, removed),
        Ordering::Greater => node.right = remove_node(node.right.take(), key, removed),
        Ordering::Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => return Some(child),
                (Some(left), Some(right)) => {
                    let (succ_key, succ_info, rest) = take_min(right);
                    node.key = succ_key;
                    node.info = succ_info;
                    node.left = Some(left);
                    node.right = rest;
                }
            }
        }
    }
    Some(rebalance(node))
}

/// Detach the minimum node of a subtree, returning its key, its metadata
/// and the rebalanced remainder.
fn take_min(mut node: Box<Node>) -> (Root, RootInfo, Link) {
    match node.left.take() {
        None => (node.key, node.info, node.right.take()),
        Some(left) => {
            let (key, info, rest) = take_min(left);
            node.left = rest;
            (key, info, Some(rebalance(node)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(s: &str) -> Root {
        Root::parse(s).unwrap()
    }

    fn insert_all(index: &mut RootIndex, roots: &[&str]) {
        for r in roots {
            index.insert(root(r), RootInfo::new());
        }
    }

    /// Walk the whole tree checking the AVL invariant and stored heights.
    fn assert_balanced(index: &RootIndex) {
        fn check(link: &Link) -> i32 {
            match link {
                None => 0,
                Some(node) => {
                    let left = check(&node.left);
                    let right = check(&node.right);
                    assert!(
                        (left - right).abs() <= 1,
                        "unbalanced at {}: left {left}, right {right}",
                        node.key
                    );
                    assert_eq!(node.height, 1 + left.max(right), "stale height at {}", node.key);
                    1 + left.max(right)
                }
            }
        }
        check(&index.root);
    }

    fn assert_ascending(index: &RootIndex) {
        let roots: Vec<&Root> = index.roots().collect();
        for pair in roots.windows(2) {
            assert!(pair[0] < pair[1], "not strictly ascending: {} >= {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn insert_and_search() {
        let mut index = RootIndex::new();
        insert_all(&mut index, &["كتب", "درس", "فهم"]);
        assert_eq!(index.len(), 3);
        assert!(index.contains(&root("كتب")));
        assert!(index.contains(&root("درس")));
        assert!(!index.contains(&root("سمع")));
    }

    #[test]
    fn duplicate_insert_is_signaled() {
        let mut index = RootIndex::new();
        assert!(index.insert(root("كتب"), RootInfo::new()));
        assert!(!index.insert(root("كتب"), RootInfo::new()));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn duplicate_insert_keeps_first_metadata() {
        let mut index = RootIndex::new();
        let mut info = RootInfo::new();
        info.add_derivative("كاتب", "فاعل");
        index.insert(root("كتب"), info);
        index.insert(root("كتب"), RootInfo::new());
        assert_eq!(index.get(&root("كتب")).unwrap().derivative_count(), 1);
    }

    #[test]
    fn ascending_insertion_stays_balanced() {
        // Monotonically increasing keys force repeated left rotations.
        let mut index = RootIndex::new();
        insert_all(
            &mut index,
            &["بتث", "تثج", "ثجح", "جحخ", "حخد", "خدذ", "دذر", "ذرز", "رزس"],
        );
        assert_eq!(index.len(), 9);
        assert_balanced(&index);
        assert_ascending(&index);
        // 9 nodes fit in height 4.
        assert!(index.height() <= 4, "height {} too large", index.height());
    }

    #[test]
    fn descending_insertion_stays_balanced() {
        let mut index = RootIndex::new();
        insert_all(
            &mut index,
            &["رزس", "ذرز", "دذر", "خدذ", "حخد", "جحخ", "ثجح", "تثج", "بتث"],
        );
        assert_balanced(&index);
        assert_ascending(&index);
    }

    #[test]
    fn zigzag_insertion_stays_balanced() {
        // Alternating order exercises the left-right and right-left cases.
        let mut index = RootIndex::new();
        insert_all(
            &mut index,
            &["دذر", "بتث", "رزس", "تثج", "ذرز", "ثجح", "خدذ"],
        );
        assert_balanced(&index);
        assert_ascending(&index);
    }

    #[test]
    fn remove_leaf_and_single_child() {
        let mut index = RootIndex::new();
        insert_all(&mut index, &["درس", "بتث", "كتب"]);
        assert!(index.remove(&root("بتث")));
        assert!(!index.remove(&root("بتث")));
        assert_eq!(index.len(), 2);
        assert_balanced(&index);
        assert_ascending(&index);
    }

    #[test]
    fn remove_two_child_node_uses_successor() {
        let mut index = RootIndex::new();
        insert_all(&mut index, &["درس", "بتث", "كتب", "جحخ", "ذرز", "فهم"]);
        // درس sits at the top with two children.
        assert!(index.remove(&root("درس")));
        assert_eq!(index.len(), 5);
        assert!(!index.contains(&root("درس")));
        assert_balanced(&index);
        assert_ascending(&index);
    }

    #[test]
    fn interleaved_insert_remove_keeps_invariant() {
        let keys = [
            "بتث", "تثج", "ثجح", "جحخ", "حخد", "خدذ", "دذر", "ذرز", "رزس", "زسش",
            "سشص", "شصض", "صضط", "ضطظ", "طظع",
        ];
        let mut index = RootIndex::new();
        for (i, key) in keys.iter().enumerate() {
            index.insert(root(key), RootInfo::new());
            assert_balanced(&index);
            // Every third step remove an earlier key.
            if i % 3 == 2 {
                index.remove(&root(keys[i / 3]));
                assert_balanced(&index);
                assert_ascending(&index);
            }
        }
    }

    #[test]
    fn iter_is_restartable() {
        let mut index = RootIndex::new();
        insert_all(&mut index, &["كتب", "درس", "فهم"]);
        let first: Vec<String> = index.roots().map(|r| r.to_string()).collect();
        let second: Vec<String> = index.roots().map(|r| r.to_string()).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn empty_index() {
        let index = RootIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.height(), 0);
        assert_eq!(index.iter().count(), 0);
    }

    #[test]
    fn derivative_bookkeeping() {
        let mut info = RootInfo::new();
        info.add_derivative("كاتب", "فاعل");
        info.add_derivative("مكتوب", "مفعول");
        info.add_derivative("كاتب", "فاعل");
        assert_eq!(info.derivative_count(), 2);
        assert_eq!(info.derivatives()[0].frequency, 2);

        assert!(info.remove_derivative("كاتب", Some("فاعل")));
        assert!(!info.remove_derivative("كاتب", None));
        assert_eq!(info.derivative_count(), 1);

        info.clear_derivatives();
        assert_eq!(info.derivative_count(), 0);
    }
}
