// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tree traversal: pre-order, post-order, level-order (BFS), and the
//! single-pass finder utilities extractors build on.

use crate::tree::Node;
use clew_core::RingQueue;
use std::collections::HashSet;

/// What a pre-order visitor wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitControl {
    Continue,
    Stop,
}

/// Pre-order traversal: visit a node, then its named children. Returning
/// [`VisitControl::Stop`] from `visit` aborts the entire traversal
/// immediately, including any siblings not yet visited.
pub fn pre_order<'tree>(node: Node<'tree>, visit: &mut impl FnMut(Node<'tree>) -> VisitControl) -> VisitControl {
    if visit(node) == VisitControl::Stop {
        return VisitControl::Stop;
    }
    for child in node.named_children() {
        if pre_order(child, visit) == VisitControl::Stop {
            return VisitControl::Stop;
        }
    }
    VisitControl::Continue
}

/// Post-order traversal: visit children before the node itself.
pub fn post_order<'tree>(node: Node<'tree>, visit: &mut impl FnMut(Node<'tree>) -> VisitControl) -> VisitControl {
    for child in node.named_children() {
        if post_order(child, visit) == VisitControl::Stop {
            return VisitControl::Stop;
        }
    }
    visit(node)
}

/// Level-order (BFS) traversal using an O(1)-amortized ring-buffer queue.
///
/// The naive implementation of this — a `Vec`/`VecDeque`-as-list with
/// front removal via `remove(0)` — is O(n) per dequeue and O(n^2) over a
/// wide tree; [`clew_core::RingQueue`] keeps both `enqueue` and `dequeue`
/// O(1) amortized, which matters on wide generated ASTs.
pub fn bfs<'tree>(root: Node<'tree>, mut visit: impl FnMut(Node<'tree>) -> VisitControl) {
    let mut queue: RingQueue<Node<'tree>> = RingQueue::new();
    queue.enqueue(root);
    while let Some(node) = queue.dequeue() {
        if visit(node) == VisitControl::Stop {
            return;
        }
        for child in node.named_children() {
            queue.enqueue(child);
        }
    }
}

/// Find the first named descendant (in pre-order) matching `predicate`,
/// including `root` itself.
pub fn find_first<'tree>(
    root: Node<'tree>,
    mut predicate: impl FnMut(Node<'tree>) -> bool,
) -> Option<Node<'tree>> {
    let mut found = None;
    pre_order(root, &mut |node| {
        if predicate(node) {
            found = Some(node);
            VisitControl::Stop
        } else {
            VisitControl::Continue
        }
    });
    found
}

/// Find every named descendant matching `predicate`, in pre-order.
pub fn find_all<'tree>(root: Node<'tree>, mut predicate: impl FnMut(Node<'tree>) -> bool) -> Vec<Node<'tree>> {
    let mut matches = Vec::new();
    pre_order(root, &mut |node| {
        if predicate(node) {
            matches.push(node);
        }
        VisitControl::Continue
    });
    matches
}

/// Find every named descendant whose `kind()` equals `node_type`.
pub fn find_by_type<'tree>(root: Node<'tree>, node_type: &str) -> Vec<Node<'tree>> {
    find_all(root, |node| node.kind() == node_type)
}

/// Single-pass multi-type collector: find every named descendant whose
/// `kind()` is in `node_types`, keyed by type. This walks the tree exactly
/// once regardless of how many types are requested — calling
/// [`find_by_type`] once per type would re-traverse the whole tree each
/// time.
pub fn find_by_types<'tree>(
    root: Node<'tree>,
    node_types: &HashSet<&str>,
) -> std::collections::HashMap<String, Vec<Node<'tree>>> {
    let mut matches: std::collections::HashMap<String, Vec<Node<'tree>>> = std::collections::HashMap::new();
    pre_order(root, &mut |node| {
        if node_types.contains(node.kind()) {
            matches.entry(node.kind().to_string()).or_default().push(node);
        }
        VisitControl::Continue
    });
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use clew_core::Language;

    const SRC: &str = "fn a() {} fn b() {} fn c() {}";

    #[test]
    fn pre_order_visits_node_before_children() {
        let tree = parse(Language::Rust, SRC).unwrap();
        let mut kinds = Vec::new();
        pre_order(tree.root(), &mut |n| {
            kinds.push(n.kind().to_string());
            VisitControl::Continue
        });
        assert_eq!(kinds.first().map(String::as_str), Some("source_file"));
    }

    #[test]
    fn stop_aborts_remaining_traversal() {
        let tree = parse(Language::Rust, SRC).unwrap();
        let mut visited = 0;
        pre_order(tree.root(), &mut |_| {
            visited += 1;
            if visited == 2 {
                VisitControl::Stop
            } else {
                VisitControl::Continue
            }
        });
        assert_eq!(visited, 2);
    }

    #[test]
    fn bfs_visits_same_node_count_as_pre_order() {
        let tree = parse(Language::Rust, SRC).unwrap();

        let mut pre_order_count = 0;
        pre_order(tree.root(), &mut |_| {
            pre_order_count += 1;
            VisitControl::Continue
        });

        let mut bfs_count = 0;
        bfs(tree.root(), |_| {
            bfs_count += 1;
            VisitControl::Continue
        });

        assert_eq!(pre_order_count, bfs_count);
    }

    #[test]
    fn find_by_type_matches_find_all_equivalent() {
        let tree = parse(Language::Rust, SRC).unwrap();
        let via_type = find_by_type(tree.root(), "function_item");
        let via_predicate = find_all(tree.root(), |n| n.kind() == "function_item");
        assert_eq!(via_type.len(), via_predicate.len());
        assert_eq!(via_type.len(), 3);
    }

    #[test]
    fn find_by_types_is_single_pass_multi_type() {
        let tree = parse(Language::Rust, SRC).unwrap();
        let wanted: HashSet<&str> = ["function_item", "identifier"].into_iter().collect();
        let grouped = find_by_types(tree.root(), &wanted);
        assert_eq!(grouped.get("function_item").map(Vec::len), Some(3));
        assert!(grouped.contains_key("identifier"));
    }
}
