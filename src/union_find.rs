// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Disjoint-set structures used by the solver to reject cycle-closing edges
//!
//! Elements are `usize` ordinals in `[0, n)`; the solver maps vertices to
//! their enumeration position before building one of these.

use std::collections::HashSet;

/// Partition of `[0, n)` into disjoint groups
pub trait DisjointSets {
    /// Whether `a` and `b` are currently known to share a group
    fn same_set(&mut self, a: usize, b: usize) -> bool;

    /// Merge the groups of `a` and `b`; returns `false` if nothing changed
    fn union(&mut self, a: usize, b: usize) -> bool;
}

// =============================================================================
// Union-Find
// =============================================================================

/// Union-find with path halving and union by rank
///
/// When ranks tie the lower ordinal becomes the root, so `find` returns the
/// same representative for a given merge history regardless of argument
/// order.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    /// Create `n` singleton sets
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Representative of the set containing `x`
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Number of disjoint sets
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether there are no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

impl DisjointSets for UnionFind {
    fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        let (root, child) = match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => (rb, ra),
            std::cmp::Ordering::Greater => (ra, rb),
            std::cmp::Ordering::Equal => {
                let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
                self.rank[root] += 1;
                (root, child)
            }
        };
        self.parent[child] = root;
        self.components -= 1;
        true
    }
}

// =============================================================================
// Membership sets
// =============================================================================

/// Every element carries its own copy of the set it believes it belongs to
///
/// A union rewrites the sets of the two named elements only. Other members
/// of either group keep their stale set, so two elements of one component
/// can still look disjoint and a later edge between them is accepted.
/// Prefer [`UnionFind`].
#[derive(Debug, Clone)]
pub struct MembershipSets {
    sets: Vec<HashSet<usize>>,
}

impl MembershipSets {
    /// Every element starts in a singleton containing itself
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            sets: (0..n).map(|i| HashSet::from([i])).collect(),
        }
    }

    /// The membership set currently recorded for `x`
    #[must_use]
    pub fn members(&self, x: usize) -> &HashSet<usize> {
        &self.sets[x]
    }
}

impl DisjointSets for MembershipSets {
    fn same_set(&mut self, a: usize, b: usize) -> bool {
        !self.sets[a].is_disjoint(&self.sets[b])
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        if self.same_set(a, b) {
            return false;
        }
        let merged: HashSet<usize> = self.sets[a].union(&self.sets[b]).copied().collect();
        self.sets[a].clone_from(&merged);
        self.sets[b] = merged;
        true
    }
}
