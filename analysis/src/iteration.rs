// iteration.rs — Retrieval and filtering of loop-nest paths.
//
// `retrieve_iteration_tree` enumerates the maximal loop-nest paths of an IET
// root so callers can pick a sub-tree to outline; `filter_iterations` trims
// one path to the consecutive run of loops a predicate accepts.

use std::collections::HashSet;

use crate::query::IetQuery;

// ── Iteration tree ──────────────────────────────────────────────────────────

/// One maximal loop-nest path, outermost loop first. Immutable.
pub struct IterationTree<'a, N> {
    nodes: Vec<&'a N>,
}

impl<'a, N> IterationTree<'a, N> {
    pub fn new(nodes: Vec<&'a N>) -> Self {
        IterationTree { nodes }
    }

    pub fn nodes(&self) -> &[&'a N] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Outermost loop of the path.
    pub fn root(&self) -> Option<&'a N> {
        self.nodes.first().copied()
    }

    /// Innermost loop of the path.
    pub fn inner(&self) -> Option<&'a N> {
        self.nodes.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a N> + '_ {
        self.nodes.iter().copied()
    }
}

impl<'a, N> Clone for IterationTree<'a, N> {
    fn clone(&self) -> Self {
        IterationTree {
            nodes: self.nodes.clone(),
        }
    }
}

// ── Retrieval ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeMode {
    /// Every section found, including ones nested in a larger section.
    Normal,
    /// Sections whose node-set is a subset of another section's are dropped.
    Superset,
}

/// All loop-nest paths within an IET, in document order. Empty if the root
/// has no loop nesting.
pub fn retrieve_iteration_tree<'a, N: IetQuery>(
    root: &'a N,
    mode: TreeMode,
) -> Vec<IterationTree<'a, N>> {
    let trees: Vec<IterationTree<'a, N>> = root
        .sections()
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(IterationTree::new)
        .collect();

    match mode {
        TreeMode::Normal => trees,
        TreeMode::Superset => {
            let keys: Vec<HashSet<usize>> = trees
                .iter()
                .map(|t| t.nodes().iter().map(|n| node_key(*n)).collect())
                .collect();
            trees
                .iter()
                .enumerate()
                .filter(|(i, tree)| {
                    !keys.iter().enumerate().any(|(j, other)| {
                        *i != j
                            && !same_path(tree, &trees[j])
                            && keys[*i].is_subset(other)
                    })
                })
                .map(|(_, tree)| tree.clone())
                .collect()
        }
    }
}

/// The first run of consecutive loops in `tree` accepted by `key`. Rejected
/// entries before the first acceptance are skipped; the first rejection after
/// an acceptance terminates the run.
pub fn filter_iterations<'a, N>(
    tree: &IterationTree<'a, N>,
    key: impl Fn(&N) -> bool,
) -> Vec<&'a N> {
    let mut filtered = Vec::new();
    for &node in tree.nodes() {
        if key(node) {
            filtered.push(node);
        } else if !filtered.is_empty() {
            break;
        }
    }
    filtered
}

// Node identity is by address; the tree is immutable for the whole analysis.
fn node_key<N>(node: &N) -> usize {
    node as *const N as usize
}

fn same_path<N>(a: &IterationTree<'_, N>, b: &IterationTree<'_, N>) -> bool {
    a.len() == b.len()
        && a.nodes()
            .iter()
            .zip(b.nodes())
            .all(|(x, y)| node_key(*x) == node_key(*y))
}

// ── Tests ───────────────────────────────────────────────────────────────────
