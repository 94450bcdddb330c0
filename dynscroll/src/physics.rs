use crate::ScrollOptions;
use crate::types::is_negligible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhysicsState {
    #[default]
    Idle,
    /// A pointer is down and moving the content directly.
    Dragging,
    /// Released with velocity; inertia decays each tick.
    Coasting,
    /// Emission suspended, e.g. while a programmatic navigation runs.
    Locked,
}

/// Turns drag input and boundary feedback into per-tick scroll deltas.
///
/// All inputs are in content units along the scroll axis. Methods that may produce motion
/// return it as `Some(delta)`; the caller applies it to the layout and reports the resulting
/// overscroll back through [`ScrollPhysics::set_edge_delta`].
#[derive(Clone, Debug)]
pub struct ScrollPhysics {
    state: PhysicsState,
    speed_coef: f32,
    inertia_coef: f32,
    elasticity_coef: f32,
    viewport_extent: f32,
    velocity: f32,
    last_delta: f32,
    elasticity: f32,
}

impl ScrollPhysics {
    pub fn new(options: &ScrollOptions) -> Self {
        Self {
            state: PhysicsState::Idle,
            speed_coef: options.speed_coef,
            inertia_coef: options.inertia_coef,
            elasticity_coef: options.elasticity_coef,
            viewport_extent: 0.0,
            velocity: 0.0,
            last_delta: 0.0,
            elasticity: 1.0,
        }
    }

    pub fn state(&self) -> PhysicsState {
        self.state
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Current drag damping in `(0, 1]`. Drops below 1 while dragging past a boundary.
    pub fn elasticity(&self) -> f32 {
        self.elasticity
    }

    pub fn is_locked(&self) -> bool {
        self.state == PhysicsState::Locked
    }

    /// Viewport length along the scroll axis, used to normalize overscroll while dragging.
    pub fn set_viewport_extent(&mut self, extent: f32) {
        self.viewport_extent = extent.max(0.0);
    }

    pub fn begin_drag(&mut self) {
        if self.is_locked() {
            return;
        }
        self.state = PhysicsState::Dragging;
        self.velocity = 0.0;
        self.last_delta = 0.0;
        self.elasticity = 1.0;
    }

    pub fn drag(&mut self, delta: f32) -> Option<f32> {
        if self.state != PhysicsState::Dragging {
            return None;
        }
        let delta = self.damp(delta);
        if !is_negligible(delta) {
            self.last_delta = delta;
        }
        Some(delta)
    }

    /// Ends the drag. The last non-negligible drag delta becomes the coasting velocity.
    pub fn end_drag(&mut self, delta: f32) -> Option<f32> {
        if self.state != PhysicsState::Dragging {
            return None;
        }
        let delta = self.damp(delta);
        if !is_negligible(delta) {
            self.last_delta = delta;
        }
        self.velocity = self.last_delta;
        self.last_delta = 0.0;
        self.state = if is_negligible(self.velocity) {
            self.velocity = 0.0;
            PhysicsState::Idle
        } else {
            PhysicsState::Coasting
        };
        vtrace!(velocity = self.velocity, "ScrollPhysics::end_drag");
        Some(delta)
    }

    /// Advances inertia by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        if self.state != PhysicsState::Coasting {
            return None;
        }
        if is_negligible(self.velocity) {
            self.velocity = 0.0;
            self.state = PhysicsState::Idle;
            return None;
        }
        let delta = self.velocity * self.speed_coef * dt;
        self.velocity *= 1.0 - (dt * self.inertia_coef).clamp(0.0, 1.0);
        Some(delta)
    }

    /// Feeds back the current overscroll at the data boundary.
    ///
    /// While dragging this only adjusts elasticity. Otherwise a non-zero correction is either
    /// returned for immediate application or becomes the coasting velocity that carries the
    /// content back to the boundary.
    pub fn set_edge_delta(&mut self, edge_delta: f32, immediate: bool) -> Option<f32> {
        if self.state == PhysicsState::Dragging {
            self.elasticity = if self.viewport_extent > 0.0 {
                1.0 - (edge_delta.abs() / self.viewport_extent).clamp(0.0, 1.0)
            } else {
                1.0
            };
            return None;
        }
        if is_negligible(edge_delta) {
            if self.is_locked() {
                // Nothing left to correct; a stale correction must not coast after unlock.
                self.velocity = 0.0;
            }
            return None;
        }
        if immediate {
            return Some(edge_delta);
        }
        self.velocity = edge_delta;
        if self.state != PhysicsState::Locked {
            self.state = PhysicsState::Coasting;
        }
        None
    }

    /// Drops any drag or inertia and goes idle. Pending velocity is returned as one final delta.
    pub fn stop(&mut self) -> Option<f32> {
        let flushed = self.flush();
        if !self.is_locked() {
            self.state = PhysicsState::Idle;
        }
        flushed
    }

    /// Suspends emission. Pending velocity is returned as one final delta.
    pub fn lock(&mut self) -> Option<f32> {
        let flushed = self.flush();
        self.state = PhysicsState::Locked;
        vtrace!("ScrollPhysics::lock");
        flushed
    }

    pub fn unlock(&mut self) {
        if !self.is_locked() {
            return;
        }
        self.state = if is_negligible(self.velocity) {
            self.velocity = 0.0;
            PhysicsState::Idle
        } else {
            PhysicsState::Coasting
        };
        vtrace!(state = ?self.state, "ScrollPhysics::unlock");
    }

    fn flush(&mut self) -> Option<f32> {
        let velocity = core::mem::take(&mut self.velocity);
        self.last_delta = 0.0;
        self.elasticity = 1.0;
        (!is_negligible(velocity)).then_some(velocity)
    }

    fn damp(&self, delta: f32) -> f32 {
        if self.elasticity < 1.0 {
            delta * self.elasticity * self.elasticity_coef
        } else {
            delta
        }
    }
}
