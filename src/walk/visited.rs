//! Per-walk visited bookkeeping.

use std::collections::hash_set;
use std::collections::HashSet;
use std::hash::Hash;

/// The set of nodes a single walk has already processed.
///
/// Each walk call creates its own and drops it on return; nothing is shared
/// between calls.
#[derive(Debug, Clone)]
pub struct NodeSet<N> {
    inner: HashSet<N>,
}

impl<N> Default for NodeSet<N> {
    fn default() -> Self {
        Self { inner: HashSet::new() }
    }
}

impl<N: Eq + Hash> NodeSet<N> {
    pub fn new() -> Self { Self::default() }

    /// Marks `node` visited. Returns `true` only the first time.
    #[inline]
    pub fn insert(&mut self, node: N) -> bool {
        self.inner.insert(node)
    }

    #[inline]
    pub fn contains(&self, node: &N) -> bool {
        self.inner.contains(node)
    }

    pub fn len(&self) -> usize { self.inner.len() }
    pub fn is_empty(&self) -> bool { self.inner.is_empty() }

    pub fn iter(&self) -> hash_set::Iter<'_, N> {
        self.inner.iter()
    }

    pub fn into_inner(self) -> HashSet<N> {
        self.inner
    }
}

impl<'a, N> IntoIterator for &'a NodeSet<N> {
    type Item = &'a N;
    type IntoIter = hash_set::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
