use core::ops::RangeInclusive;

use crate::{Edge, ItemsProvider, ScrollError};

/// The contiguous range `[head, tail]` of item indices that currently have widgets.
///
/// An empty window has `head == tail + 1`; a non-empty one has `head <= tail`. The window never
/// widens onto an index the provider reports as absent, which is how "no more data" at either
/// end is detected.
#[derive(Clone, Debug)]
pub struct IndexWindow<P> {
    items: P,
    head: isize,
    tail: isize,
}

impl<P: ItemsProvider> IndexWindow<P> {
    /// Creates an empty window positioned just before `start_index`.
    pub fn new(items: P, start_index: usize) -> Self {
        let head = start_index as isize;
        Self {
            items,
            head,
            tail: head - 1,
        }
    }

    pub fn items(&self) -> &P {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut P {
        &mut self.items
    }

    pub fn head(&self) -> isize {
        self.head
    }

    pub fn tail(&self) -> isize {
        self.tail
    }

    pub fn is_empty(&self) -> bool {
        self.head > self.tail
    }

    pub fn len(&self) -> usize {
        (self.tail - self.head + 1).max(0) as usize
    }

    /// The materialized indices, or `None` for an empty window.
    pub fn range(&self) -> Option<RangeInclusive<usize>> {
        if self.is_empty() {
            return None;
        }
        Some(self.head as usize..=self.tail as usize)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range().is_some_and(|range| range.contains(&index))
    }

    /// Position of `index` relative to the head, if it is inside the window.
    pub fn relative_index(&self, index: usize) -> Option<usize> {
        self.contains(index).then(|| index - self.head as usize)
    }

    pub fn edge_index(&self, edge: Edge) -> isize {
        match edge {
            Edge::Head => self.head,
            Edge::Tail => self.tail,
        }
    }

    /// The item at `edge`, when the window is non-empty.
    pub fn edge_item(&self, edge: Edge) -> Option<P::Item> {
        if self.is_empty() {
            return None;
        }
        self.item(self.edge_index(edge))
    }

    /// Grows the window by one index at `edge`.
    ///
    /// Returns `false` without touching the window when the next index has no item.
    pub fn try_inflate(&mut self, edge: Edge) -> bool {
        let next = self.edge_index(edge) + edge.sign();
        if !self.exists(next) {
            return false;
        }

        let was_empty = self.is_empty();
        self.set_edge_index(edge, next);
        if was_empty {
            self.set_edge_index(edge.opposite(), next);
        }
        self.check_indices();
        vtrace!(?edge, head = self.head, tail = self.tail, "IndexWindow::try_inflate");
        true
    }

    /// Shrinks the window by one index at `edge`. Returns `false` for an empty window.
    pub fn try_deflate(&mut self, edge: Edge) -> bool {
        if self.is_empty() {
            return false;
        }

        let index = self.edge_index(edge) - edge.sign();
        self.set_edge_index(edge, index);
        self.check_indices();
        vtrace!(?edge, head = self.head, tail = self.tail, "IndexWindow::try_deflate");
        true
    }

    /// `true` when there is no item beyond `edge`, i.e. the edge sits on a data boundary.
    pub fn check_edge(&self, edge: Edge) -> bool {
        !self.exists(self.edge_index(edge) + edge.sign())
    }

    /// Collapses the window to an empty one positioned just before `index`.
    ///
    /// The next tail inflation materializes `index`.
    pub fn reset_to_index(&mut self, index: usize) -> Result<(), ScrollError> {
        if !self.items.contains(index) {
            return Err(ScrollError::MissingItem(index));
        }
        self.head = index as isize;
        self.tail = self.head - 1;
        vdebug!(index, "IndexWindow::reset_to_index");
        Ok(())
    }

    fn item(&self, index: isize) -> Option<P::Item> {
        let index = usize::try_from(index).ok()?;
        self.items.item(index)
    }

    fn exists(&self, index: isize) -> bool {
        usize::try_from(index).is_ok_and(|index| self.items.contains(index))
    }

    fn set_edge_index(&mut self, edge: Edge, index: isize) {
        match edge {
            Edge::Head => self.head = index,
            Edge::Tail => self.tail = index,
        }
    }

    fn check_indices(&self) {
        assert!(
            self.head - self.tail <= 1,
            "IndexWindow: head and tail crossed (head={}, tail={})",
            self.head,
            self.tail
        );
    }
}
