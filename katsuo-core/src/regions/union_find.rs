//! Union-find (disjoint set union) over zero-based region indices.
//!
//! `find` compresses the whole visited path onto the root in a second pass,
//! and `union` attaches the shallower tree under the deeper one. On a rank
//! tie the left root wins and its rank grows by one.

/// Disjoint sets over `0..len` with path compression and union by rank.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the structure holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> usize { self.components }

    /// Returns the root of the set containing `node`.
    ///
    /// Every node on the path from `node` to the root is repointed directly at
    /// the root.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false`, leaving the structure unchanged, when both already
    /// belong to the same set.
    ///
    /// # Panics
    /// Panics when either index is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Panics
    /// Panics when either index is `>= self.len()`.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }

    #[cfg(test)]
    pub(crate) fn rank_of(&self, node: usize) -> u8 {
        self.rank[node]
    }
}
