//! Snapshot iteration.

use std::iter::FusedIterator;
use std::sync::Arc;

/// Iterator over a snapshot fetched with a single command.
///
/// The snapshot reflects the collection at the time the iterator was
/// created; later writes are not visible. Cloning the iterator, or calling
/// [`Iter::restart`], walks the same snapshot again without another round
/// trip.
#[derive(Debug, Clone)]
pub struct Iter<T> {
    items: Arc<[T]>,
    pos: usize,
}

impl<T> Iter<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
            pos: 0,
        }
    }

    /// A fresh iterator over the same snapshot.
    pub fn restart(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            pos: 0,
        }
    }

    /// The whole snapshot, regardless of position.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Iter<T> {}

impl<T: Clone> FusedIterator for Iter<T> {}
