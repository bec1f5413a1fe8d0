//! LIFO work list of discovered-but-unprocessed entries.

use smallvec::SmallVec;

// Most walks in practice touch a handful of nodes at a time.
const INLINE_CAPACITY: usize = 16;

/// A stack of pending entries. The walks pop from the end, which makes them
/// depth-first. Duplicates are allowed; the visited check happens on pop.
#[derive(Debug)]
pub(crate) struct Frontier<T> {
    stack: SmallVec<[T; INLINE_CAPACITY]>,
}

impl<T> Frontier<T> {
    pub(crate) fn new() -> Self {
        Self { stack: SmallVec::new() }
    }

    #[inline]
    pub(crate) fn push(&mut self, entry: T) {
        self.stack.push(entry);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }
}

impl<T> Extend<T> for Frontier<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.stack.extend(iter);
    }
}

impl<T> FromIterator<T> for Frontier<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { stack: iter.into_iter().collect() }
    }
}
