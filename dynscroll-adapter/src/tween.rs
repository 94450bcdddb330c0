/// Splits a total scroll delta into per-tick deltas that follow an easing curve.
///
/// The list is driven by relative deltas, so instead of sampling an absolute offset the tween
/// hands out the difference between the eased target and what it has already emitted. The
/// emitted deltas always sum to `total`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeltaTween {
    pub total: f32,
    /// Seconds.
    pub duration: f32,
    pub elapsed: f32,
    pub emitted: f32,
    pub easing: Easing,
}

impl DeltaTween {
    pub fn new(total: f32, duration: f32, easing: Easing) -> Self {
        Self {
            total,
            duration: duration.max(f32::MIN_POSITIVE),
            elapsed: 0.0,
            emitted: 0.0,
            easing,
        }
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Part of `total` not handed out yet.
    pub fn remaining(&self) -> f32 {
        self.total - self.emitted
    }

    /// Advances by `dt` seconds and returns the delta to apply this tick.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        let t = self.elapsed / self.duration;
        let target = if self.is_done() {
            self.total
        } else {
            self.total * self.easing.sample(t)
        };
        let delta = target - self.emitted;
        self.emitted = target;
        delta
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    #[default]
    EaseOutQuad,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseOutQuad => t * (2.0 - t),
        }
    }
}
