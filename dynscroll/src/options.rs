use crate::Alignment;

/// Configuration for [`crate::DynamicScrollList`].
///
/// Options are fixed for the lifetime of a list.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollOptions {
    /// Viewport side the head item is anchored to. Also selects the scroll axis.
    pub alignment: Alignment,
    /// Gap between consecutive widgets, in content units.
    pub spacing: f32,
    /// Multiplier turning coasting velocity into a per-second delta.
    pub speed_coef: f32,
    /// Fraction of coasting velocity lost per second.
    pub inertia_coef: f32,
    /// Extra damping applied to drag input once it is pulled past a data boundary.
    pub elasticity_coef: f32,
    /// First index of the initial (empty) window.
    pub start_index: usize,
}

impl ScrollOptions {
    pub fn new(alignment: Alignment) -> Self {
        Self {
            alignment,
            ..Self::default()
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            alignment: Alignment::Top,
            spacing: 0.0,
            speed_coef: 15.0,
            inertia_coef: 3.0,
            elasticity_coef: 0.5,
            start_index: 0,
        }
    }
}
