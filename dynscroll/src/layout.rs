use std::collections::VecDeque;

use core::fmt;

use crate::types::is_negligible;
use crate::{Alignment, Axis, Edge, ScrollError, Viewport, Widget, WidgetHandle, WidgetPool, WidgetsProvider};

/// Lays widgets out along the scroll axis inside a movable content frame.
///
/// The frame is pinned to the viewport side named by the alignment and shifted by an anchored
/// position. Content-local coordinates map to world space as
/// `viewport.rect.side(alignment) + (position + local) * viewport.scale`.
///
/// For each edge the layout caches the outer boundary of the edge-most widget (its "last
/// extent"). An empty layout still knows where the next widget goes on either side, so
/// inflation never has to special-case the empty state.
pub struct ContentLayout<W: WidgetsProvider> {
    pool: WidgetPool<W>,
    widgets: VecDeque<WidgetHandle>,
    alignment: Alignment,
    spacing: f32,
    position: f32,
    last_extents: [f32; 2],
}

impl<W: WidgetsProvider> ContentLayout<W> {
    pub fn new(widgets: W, alignment: Alignment, spacing: f32) -> Self {
        Self {
            pool: WidgetPool::new(widgets),
            widgets: VecDeque::new(),
            alignment,
            spacing,
            position: 0.0,
            last_extents: initial_extents(alignment, spacing),
        }
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn axis(&self) -> Axis {
        self.alignment.axis()
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Anchored position of the content frame along the scroll axis.
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn last_extent(&self, edge: Edge) -> f32 {
        self.last_extents[edge.slot()]
    }

    pub fn pool(&self) -> &WidgetPool<W> {
        &self.pool
    }

    #[cfg(test)]
    pub(crate) fn pool_mut(&mut self) -> &mut WidgetPool<W> {
        &mut self.pool
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Laid-out widgets in index order, head first.
    pub fn widgets(&self) -> impl Iterator<Item = &W::Widget> + '_ {
        self.widgets
            .iter()
            .filter_map(move |&handle| self.pool.get(handle))
    }

    pub fn widget(&self, relative_index: usize) -> Option<&W::Widget> {
        let handle = *self.widgets.get(relative_index)?;
        self.pool.get(handle)
    }

    /// Shifts the content frame by `delta` along the scroll axis.
    ///
    /// Returns the edge the motion uncovers, or `None` for a negligible delta.
    pub fn move_by(&mut self, delta: f32) -> Option<Edge> {
        if is_negligible(delta) {
            return None;
        }
        self.position += delta;
        let direction = delta * self.alignment.sign();
        vtrace!(delta, position = self.position, "ContentLayout::move_by");
        Some(if direction > 0.0 { Edge::Tail } else { Edge::Head })
    }

    /// `true` when the viewport reaches past where the next widget at `edge` would start.
    pub fn need_inflate(&self, edge: Edge, viewport: &Viewport) -> bool {
        let sign = self.edge_sign(edge);
        let viewport_edge = viewport.rect.side(self.edge_side(edge));
        let next = self.to_world(self.last_extent(edge) + self.spacing * sign, viewport);
        (viewport_edge - next) * sign > 0.0
    }

    /// Materializes `item` right next to the current last extent at `edge`.
    pub fn inflate(&mut self, edge: Edge, item: &W::Item) -> Result<(), ScrollError> {
        let axis = self.axis();
        let sign = self.edge_sign(edge);
        let next = self.last_extent(edge) + self.spacing * sign;

        let handle = self.pool.acquire(item);
        let widget = self
            .pool
            .get_mut(handle)
            .ok_or(ScrollError::UnknownWidget)?;
        widget.fill(item);
        widget.recalc();
        let extent = widget.extent(axis);
        let outer = next + extent * sign;
        widget.set_position(
            axis,
            match edge {
                Edge::Head => outer,
                Edge::Tail => next,
            },
        );

        self.last_extents[edge.slot()] = outer;
        match edge {
            Edge::Head => self.widgets.push_front(handle),
            Edge::Tail => self.widgets.push_back(handle),
        }
        vtrace!(?edge, extent, last_extent = outer, "ContentLayout::inflate");
        Ok(())
    }

    /// `true` when the edge-most widget has scrolled completely out of the viewport.
    pub fn need_deflate(&self, edge: Edge, viewport: &Viewport) -> bool {
        let Some(widget) = self.edge_widget(edge) else {
            return false;
        };
        let axis = self.axis();
        let (start, end) = self.world_span(widget, viewport);
        !(end > viewport.rect.min(axis) && start < viewport.rect.max(axis))
    }

    /// Returns the edge-most widget to the pool and rolls the last extent back past it.
    pub fn deflate(&mut self, edge: Edge) -> Result<(), ScrollError> {
        let handle = match edge {
            Edge::Head => self.widgets.front(),
            Edge::Tail => self.widgets.back(),
        };
        let Some(&handle) = handle else {
            return Ok(());
        };
        let extent = self
            .pool
            .get(handle)
            .map(|widget| widget.extent(self.axis()))
            .ok_or(ScrollError::UnknownWidget)?;
        self.pool.release(handle)?;
        match edge {
            Edge::Head => self.widgets.pop_front(),
            Edge::Tail => self.widgets.pop_back(),
        };

        self.last_extents[edge.slot()] -= (extent + self.spacing) * self.edge_sign(edge);
        vtrace!(?edge, extent, last_extent = self.last_extent(edge), "ContentLayout::deflate");
        Ok(())
    }

    /// Distance, in content units, the viewport has been pulled past the content at `edge`.
    ///
    /// The result is signed as the delta that would bring the content back to the viewport
    /// edge, and is zero while the content still covers that edge. Callers only consult it for
    /// an edge on the data boundary.
    pub fn edge_delta(&self, edge: Edge, viewport: &Viewport) -> f32 {
        let sign = self.edge_sign(edge);
        let viewport_edge = viewport.rect.side(self.edge_side(edge));
        let content_edge = self.to_world(self.last_extent(edge), viewport);
        let overscroll = (viewport_edge - content_edge) * sign;
        if overscroll > 0.0 {
            overscroll * sign / viewport.scale
        } else {
            0.0
        }
    }

    /// World coordinate of the center of the widget at `relative_index`.
    pub fn widget_center(&self, relative_index: usize, viewport: &Viewport) -> Option<f32> {
        let widget = self.widget(relative_index)?;
        let (start, end) = self.world_span(widget, viewport);
        Some((start + end) * 0.5)
    }

    /// Releases every laid-out widget and moves the frame back to its origin.
    pub fn reset(&mut self) -> Result<(), ScrollError> {
        for handle in self.widgets.drain(..) {
            self.pool.release(handle)?;
        }
        self.position = 0.0;
        self.last_extents = initial_extents(self.alignment, self.spacing);
        vtrace!("ContentLayout::reset");
        Ok(())
    }

    /// Drops all laid-out widgets and hands every pooled widget back to the host.
    pub fn clear(&mut self) {
        self.widgets.clear();
        self.pool.clear();
    }

    fn edge_side(&self, edge: Edge) -> Alignment {
        match edge {
            Edge::Head => self.alignment,
            Edge::Tail => self.alignment.opposite(),
        }
    }

    fn edge_sign(&self, edge: Edge) -> f32 {
        self.edge_side(edge).sign()
    }

    fn edge_widget(&self, edge: Edge) -> Option<&W::Widget> {
        let handle = match edge {
            Edge::Head => self.widgets.front(),
            Edge::Tail => self.widgets.back(),
        }?;
        self.pool.get(*handle)
    }

    fn to_world(&self, local: f32, viewport: &Viewport) -> f32 {
        viewport.rect.side(self.alignment) + (self.position + local) * viewport.scale
    }

    /// World-space `(min, max)` of a widget along the scroll axis.
    fn world_span(&self, widget: &W::Widget, viewport: &Viewport) -> (f32, f32) {
        let axis = self.axis();
        let aligned = widget.position(axis);
        let far = aligned - widget.extent(axis) * self.alignment.sign();
        let a = self.to_world(aligned, viewport);
        let b = self.to_world(far, viewport);
        (a.min(b), a.max(b))
    }
}

impl<W: WidgetsProvider> fmt::Debug for ContentLayout<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentLayout")
            .field("alignment", &self.alignment)
            .field("spacing", &self.spacing)
            .field("position", &self.position)
            .field("last_extents", &self.last_extents)
            .field("widgets", &self.widgets.len())
            .field("pool", &self.pool)
            .finish()
    }
}

/// The head extent starts at the frame origin; the tail extent sits one spacing behind it so the
/// first tail widget also lands on the origin.
fn initial_extents(alignment: Alignment, spacing: f32) -> [f32; 2] {
    [0.0, spacing * alignment.sign()]
}
