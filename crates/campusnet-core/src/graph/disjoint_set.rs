//! Disjoint-set (union-find) over vertex indices.
//!
//! `find` compresses paths by pointing every visited node at the root; `union`
//! attaches the lower-rank root under the higher-rank one. Together they keep
//! amortized cost close to constant.

use crate::error::{CampusError, Result};

/// A partition of `[0, n)` into disjoint groups.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Creates `n` singleton sets from an unchecked count.
    ///
    /// Fails with [`CampusError::InvalidSize`] if `n` is negative.
    pub fn make_set(n: i64) -> Result<Self> {
        let size = usize::try_from(n).map_err(|_| CampusError::InvalidSize { size: n })?;
        Ok(Self::new(size))
    }

    /// Returns the representative of the set containing `x`.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.root(x))
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` when both were already in the same set, i.e. an edge
    /// between them would close a cycle.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.merge(a, b))
    }

    /// `union` for indices already known to be in range.
    ///
    /// Panics if either index is `>= len()`.
    pub(crate) fn merge(&mut self, a: usize, b: usize) -> bool {
        let mut ra = self.root(a);
        let mut rb = self.root(b);

        if ra == rb {
            return false;
        }

        if self.rank[ra] < self.rank[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        if self.rank[ra] == self.rank[rb] {
            self.rank[ra] += 1;
        }
        self.sets -= 1;

        true
    }

    fn root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// True when `a` and `b` share a representative
    pub fn same_set(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Number of disjoint groups currently tracked
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(CampusError::out_of_range(x, self.parent.len()))
        }
    }
}
