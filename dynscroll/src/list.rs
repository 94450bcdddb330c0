use core::fmt;

use crate::{
    ContentLayout, Edge, IndexWindow, ItemsProvider, PhysicsState, ScrollError, ScrollOptions,
    ScrollPhysics, Viewport, WidgetsProvider,
};

/// A recycling scroll list.
///
/// Owns the index window, the content layout (and through it the widget pool) and the scroll
/// physics, and keeps them consistent: every delta moves the content frame, evicts widgets that
/// left the viewport, materializes items that entered it, and feeds the resulting overscroll back
/// into the physics.
///
/// The list is driven entirely by the host: call [`DynamicScrollList::tick`] once per frame,
/// forward pointer drags through `begin_drag`/`drag`/`end_drag`, and report viewport changes via
/// [`DynamicScrollList::set_viewport`].
pub struct DynamicScrollList<P, W>
where
    P: ItemsProvider,
    W: WidgetsProvider<Item = P::Item>,
{
    options: ScrollOptions,
    window: IndexWindow<P>,
    layout: ContentLayout<W>,
    physics: ScrollPhysics,
    viewport: Viewport,
    shut_down: bool,
}

impl<P, W> DynamicScrollList<P, W>
where
    P: ItemsProvider,
    W: WidgetsProvider<Item = P::Item>,
{
    /// Creates the list and fills `viewport` starting at `options.start_index`.
    ///
    /// Fails with [`ScrollError::MissingItem`] when a non-zero start index has no item. An empty
    /// provider with the default start index yields an empty list.
    pub fn new(
        items: P,
        widgets: W,
        viewport: Viewport,
        options: ScrollOptions,
    ) -> Result<Self, ScrollError> {
        vdebug!(
            alignment = ?options.alignment,
            spacing = options.spacing,
            start_index = options.start_index,
            "DynamicScrollList::new"
        );
        if options.start_index > 0 && !items.contains(options.start_index) {
            return Err(ScrollError::MissingItem(options.start_index));
        }
        let mut physics = ScrollPhysics::new(&options);
        physics.set_viewport_extent(viewport.content_extent(options.alignment.axis()));
        let mut list = Self {
            window: IndexWindow::new(items, options.start_index),
            layout: ContentLayout::new(widgets, options.alignment, options.spacing),
            physics,
            viewport,
            options,
            shut_down: false,
        };
        list.initial_refresh()?;
        Ok(list)
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    pub fn window(&self) -> &IndexWindow<P> {
        &self.window
    }

    pub fn layout(&self) -> &ContentLayout<W> {
        &self.layout
    }

    pub fn physics(&self) -> &ScrollPhysics {
        &self.physics
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Updates viewport geometry and refills or trims both ends.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<(), ScrollError> {
        self.ensure_running()?;
        self.viewport = viewport;
        self.physics
            .set_viewport_extent(viewport.content_extent(self.layout.axis()));
        self.refresh(Edge::Tail)?;
        let edge_delta = self.refresh(Edge::Head)?;
        self.feed_edge_delta(edge_delta, false)
    }

    /// Applies an external scroll delta (content units along the scroll axis).
    pub fn on_scroll(&mut self, delta: f32) -> Result<(), ScrollError> {
        self.ensure_running()?;
        self.scroll(delta, false)
    }

    /// Advances inertia and edge spring-back by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Result<(), ScrollError> {
        self.ensure_running()?;
        match self.physics.tick(dt) {
            Some(delta) => self.scroll(delta, false),
            None => Ok(()),
        }
    }

    pub fn begin_drag(&mut self) -> Result<(), ScrollError> {
        self.ensure_running()?;
        self.physics.begin_drag();
        Ok(())
    }

    pub fn drag(&mut self, delta: f32) -> Result<(), ScrollError> {
        self.ensure_running()?;
        match self.physics.drag(delta) {
            Some(delta) => self.scroll(delta, false),
            None => Ok(()),
        }
    }

    /// Ends the drag. Content released past a data boundary starts springing back right away.
    pub fn end_drag(&mut self, delta: f32) -> Result<(), ScrollError> {
        self.ensure_running()?;
        let Some(delta) = self.physics.end_drag(delta) else {
            return Ok(());
        };
        self.scroll(delta, false)?;
        let edge_delta = self.edge_delta();
        self.feed_edge_delta(edge_delta, false)
    }

    /// Stops inertia, applying whatever velocity was pending as one delta.
    pub fn stop_scrolling(&mut self) -> Result<(), ScrollError> {
        self.ensure_running()?;
        match self.physics.stop() {
            Some(delta) => self.scroll(delta, false),
            None => Ok(()),
        }
    }

    /// Locks the physics against input and inertia, flushing pending velocity first.
    pub fn lock_physics(&mut self) -> Result<(), ScrollError> {
        self.ensure_running()?;
        match self.physics.lock() {
            Some(delta) => self.scroll(delta, false),
            None => Ok(()),
        }
    }

    pub fn unlock_physics(&mut self) {
        self.physics.unlock();
    }

    /// Feeds the current overscroll back into the physics once.
    ///
    /// Content left past a data boundary (e.g. by a cancelled navigation) springs back on the
    /// following ticks.
    pub fn settle(&mut self) -> Result<(), ScrollError> {
        self.ensure_running()?;
        let edge_delta = self.edge_delta();
        self.feed_edge_delta(edge_delta, false)
    }

    pub fn physics_state(&self) -> PhysicsState {
        self.physics.state()
    }

    /// Applies a programmatic delta. Boundary corrections are applied in the same call instead
    /// of being turned into inertia.
    pub fn navigate_by(&mut self, delta: f32) -> Result<(), ScrollError> {
        self.ensure_running()?;
        self.scroll(delta, true)
    }

    /// Moves by `delta`, measures the resulting overscroll, then moves back.
    ///
    /// The physics is left untouched. The returned correction, added to `delta`, lands the
    /// content on the data boundary when `delta` alone would overshoot it.
    pub fn probe_edge_delta(&mut self, delta: f32) -> Result<f32, ScrollError> {
        self.ensure_running()?;
        let Some(edge_delta) = self.apply(delta)? else {
            return Ok(self.edge_delta());
        };
        self.apply(-delta)?;
        Ok(edge_delta)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        self.window.contains(index)
    }

    /// Discards every widget and rebuilds the list starting at `index`.
    pub fn reseek(&mut self, index: usize) -> Result<(), ScrollError> {
        self.ensure_running()?;
        self.window.reset_to_index(index)?;
        self.layout.reset()?;
        vdebug!(index, "DynamicScrollList::reseek");
        self.initial_refresh()
    }

    /// World coordinate, along the scroll axis, of the center of `index`'s widget.
    pub fn item_center(&self, index: usize) -> Option<f32> {
        let relative = self.window.relative_index(index)?;
        self.layout.widget_center(relative, &self.viewport)
    }

    /// Returns every widget to the host. The list rejects further input afterwards.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.physics.stop();
        self.layout.clear();
        vdebug!("DynamicScrollList::shutdown");
    }

    fn ensure_running(&self) -> Result<(), ScrollError> {
        if self.shut_down {
            return Err(ScrollError::ShutDown);
        }
        Ok(())
    }

    fn initial_refresh(&mut self) -> Result<(), ScrollError> {
        let edge_delta = self.refresh(Edge::Tail)?;
        self.feed_edge_delta(edge_delta, true)
    }

    fn scroll(&mut self, delta: f32, immediate: bool) -> Result<(), ScrollError> {
        match self.apply(delta)? {
            Some(edge_delta) => self.feed_edge_delta(edge_delta, immediate),
            None => Ok(()),
        }
    }

    fn feed_edge_delta(&mut self, edge_delta: f32, immediate: bool) -> Result<(), ScrollError> {
        // An immediate correction is applied once; whatever it leaves over becomes inertia.
        let mut pending = self.physics.set_edge_delta(edge_delta, immediate);
        while let Some(correction) = pending.take() {
            if let Some(edge_delta) = self.apply(correction)? {
                pending = self.physics.set_edge_delta(edge_delta, false);
            }
        }
        Ok(())
    }

    /// Moves the content and runs the evict/fill loop. Returns the overscroll afterwards, or
    /// `None` when the delta was too small to move anything.
    fn apply(&mut self, delta: f32) -> Result<Option<f32>, ScrollError> {
        match self.layout.move_by(delta) {
            Some(edge) => self.refresh(edge).map(Some),
            None => Ok(None),
        }
    }

    fn refresh(&mut self, edge: Edge) -> Result<f32, ScrollError> {
        while self.try_deflate(edge.opposite())? {}
        while self.try_inflate(edge)? {}
        Ok(self.edge_delta())
    }

    fn try_inflate(&mut self, edge: Edge) -> Result<bool, ScrollError> {
        if !self.layout.need_inflate(edge, &self.viewport) || !self.window.try_inflate(edge) {
            return Ok(false);
        }
        let Some(item) = self.window.edge_item(edge) else {
            vwarn!(
                index = self.window.edge_index(edge),
                "provider reported an item but returned none"
            );
            self.window.try_deflate(edge);
            return Ok(false);
        };
        self.layout.inflate(edge, &item)?;

        // A large move can leave stale widgets behind on the far side in the same tick.
        self.try_deflate(edge.opposite())?;
        Ok(true)
    }

    fn try_deflate(&mut self, edge: Edge) -> Result<bool, ScrollError> {
        if !self.layout.need_deflate(edge, &self.viewport) {
            return Ok(false);
        }
        self.layout.deflate(edge)?;
        Ok(self.window.try_deflate(edge))
    }

    fn edge_delta(&self) -> f32 {
        Edge::ALL
            .into_iter()
            .find(|&edge| self.window.check_edge(edge))
            .map_or(0.0, |edge| self.layout.edge_delta(edge, &self.viewport))
    }
}

impl<P, W> fmt::Debug for DynamicScrollList<P, W>
where
    P: ItemsProvider,
    W: WidgetsProvider<Item = P::Item>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicScrollList")
            .field("options", &self.options)
            .field("head", &self.window.head())
            .field("tail", &self.window.tail())
            .field("layout", &self.layout)
            .field("physics", &self.physics)
            .field("viewport", &self.viewport)
            .field("shut_down", &self.shut_down)
            .finish()
    }
}
