use dynscroll::{
    DynamicScrollList, ItemsProvider, ScrollError, ScrollOptions, Viewport, WidgetsProvider,
};

use crate::{DeltaTween, Easing};

/// Default length of an animated navigation, in seconds.
pub const NAVIGATION_DURATION: f32 = 0.33;

/// A framework-neutral controller that wraps a [`DynamicScrollList`] and adds programmatic
/// navigation (center-on-index, optionally animated).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport` / `on_scroll` and the drag methods when UI events occur
/// - `tick(dt)` each frame, which advances either the navigation animation or the list physics
///
/// While a navigation runs the list physics stays locked, so leftover inertia cannot fight it.
/// User input (`on_scroll`, `begin_drag`) cancels the animation.
pub struct Controller<P, W>
where
    P: ItemsProvider,
    W: WidgetsProvider<Item = P::Item>,
{
    list: DynamicScrollList<P, W>,
    tween: Option<DeltaTween>,
    duration: f32,
    easing: Easing,
}

impl<P, W> Controller<P, W>
where
    P: ItemsProvider,
    W: WidgetsProvider<Item = P::Item>,
{
    pub fn new(
        items: P,
        widgets: W,
        viewport: Viewport,
        options: ScrollOptions,
    ) -> Result<Self, ScrollError> {
        DynamicScrollList::new(items, widgets, viewport, options).map(Self::from_list)
    }

    pub fn from_list(list: DynamicScrollList<P, W>) -> Self {
        Self {
            list,
            tween: None,
            duration: NAVIGATION_DURATION,
            easing: Easing::EaseOutQuad,
        }
    }

    /// Overrides the duration (seconds) and curve used by animated navigation.
    pub fn with_navigation(mut self, duration: f32, easing: Easing) -> Self {
        self.duration = duration;
        self.easing = easing;
        self
    }

    pub fn list(&self) -> &DynamicScrollList<P, W> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut DynamicScrollList<P, W> {
        &mut self.list
    }

    pub fn into_list(self) -> DynamicScrollList<P, W> {
        self.list
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Stops a running navigation where it is.
    ///
    /// The physics is unlocked and the current overscroll is fed back once, so content left
    /// past a data boundary springs back.
    pub fn cancel_animation(&mut self) -> Result<(), ScrollError> {
        if self.tween.take().is_none() {
            return Ok(());
        }
        vdebug!("Controller: navigation cancelled");
        self.list.unlock_physics();
        self.list.settle()
    }

    pub fn on_viewport(&mut self, viewport: Viewport) -> Result<(), ScrollError> {
        self.list.set_viewport(viewport)
    }

    /// Call this for wheel/trackpad deltas. Cancels any running navigation.
    pub fn on_scroll(&mut self, delta: f32) -> Result<(), ScrollError> {
        self.cancel_animation()?;
        self.list.on_scroll(delta)
    }

    /// Cancels any running navigation, then starts a drag.
    pub fn begin_drag(&mut self) -> Result<(), ScrollError> {
        self.cancel_animation()?;
        self.list.begin_drag()
    }

    pub fn drag(&mut self, delta: f32) -> Result<(), ScrollError> {
        self.list.drag(delta)
    }

    pub fn end_drag(&mut self, delta: f32) -> Result<(), ScrollError> {
        self.list.end_drag(delta)
    }

    /// Advances the controller by `dt` seconds.
    ///
    /// - If a navigation is running, applies its next delta and unlocks the physics once it
    ///   completes.
    /// - Otherwise, ticks the list physics.
    pub fn tick(&mut self, dt: f32) -> Result<(), ScrollError> {
        let Some(tween) = self.tween.as_mut() else {
            return self.list.tick(dt);
        };

        let delta = tween.advance(dt);
        let done = tween.is_done();
        self.list.navigate_by(delta)?;

        if done {
            self.tween = None;
            self.list.unlock_physics();
            vtrace!("Controller: navigation finished");
        }
        Ok(())
    }

    /// Scrolls so the widget for `index` sits at the viewport center.
    ///
    /// When `index` is outside the materialized window the list is rebuilt starting at
    /// `index` first. Near either end of the data the target is pulled back so the content stops
    /// on the boundary instead. With `animated`, the motion is spread over the navigation
    /// duration by subsequent `tick` calls.
    ///
    /// Returns the total delta of the navigation.
    pub fn center_on_index(&mut self, index: usize, animated: bool) -> Result<f32, ScrollError> {
        self.tween = None;
        self.list.stop_scrolling()?;
        self.list.lock_physics()?;

        let result = self.start_navigation(index, animated);
        if result.is_err() || !self.is_animating() {
            self.list.unlock_physics();
        }
        result
    }

    fn start_navigation(&mut self, index: usize, animated: bool) -> Result<f32, ScrollError> {
        if !self.list.contains_index(index) {
            self.list.reseek(index)?;
        }
        let center = self
            .list
            .item_center(index)
            .ok_or(ScrollError::NotMaterialized(index))?;

        let viewport = self.list.viewport();
        let axis = self.list.layout().axis();
        let delta = (viewport.rect.center(axis) - center) / viewport.scale;
        let total = delta + self.list.probe_edge_delta(delta)?;
        vdebug!(index, delta, total, animated, "Controller::center_on_index");

        if animated {
            self.tween = Some(DeltaTween::new(total, self.duration, self.easing));
        } else {
            self.list.navigate_by(total)?;
        }
        Ok(total)
    }
}

impl<P, W> core::fmt::Debug for Controller<P, W>
where
    P: ItemsProvider,
    W: WidgetsProvider<Item = P::Item>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("list", &self.list)
            .field("tween", &self.tween)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .finish()
    }
}
