/// Deltas, velocities and extents below this magnitude are treated as zero.
pub const EPSILON: f32 = 1e-3;

pub(crate) fn is_negligible(value: f32) -> bool {
    value.abs() < EPSILON
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

/// One end of the materialized index window.
///
/// `Head` grows toward lower indices, `Tail` toward higher ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Head,
    Tail,
}

impl Edge {
    /// Every edge, in the order boundaries are inspected.
    pub const ALL: [Edge; 2] = [Edge::Head, Edge::Tail];

    pub const fn opposite(self) -> Self {
        match self {
            Self::Head => Self::Tail,
            Self::Tail => Self::Head,
        }
    }

    /// Index step taken when this edge grows by one item.
    pub const fn sign(self) -> isize {
        match self {
            Self::Head => -1,
            Self::Tail => 1,
        }
    }

    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Head => 0,
            Self::Tail => 1,
        }
    }
}

/// The viewport side the head item is anchored to.
///
/// World space is x-right, y-up: `Top` is the `max_y` side and `Right` the `max_x` side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    Left,
    Right,
    Bottom,
    #[default]
    Top,
}

impl Alignment {
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::X,
            Self::Bottom | Self::Top => Axis::Y,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Top => Self::Bottom,
        }
    }

    /// Direction along the axis in which widgets stack when growing toward this side.
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left | Self::Bottom => -1.0,
            Self::Right | Self::Top => 1.0,
        }
    }
}

/// An axis-aligned world-space rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rect {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x: min_x.min(max_x),
            min_y: min_y.min(max_y),
            max_x: min_x.max(max_x),
            max_y: min_y.max(max_y),
        }
    }

    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn min(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.min_x,
            Axis::Y => self.min_y,
        }
    }

    pub fn max(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.max_x,
            Axis::Y => self.max_y,
        }
    }

    pub fn extent(&self, axis: Axis) -> f32 {
        self.max(axis) - self.min(axis)
    }

    pub fn center(&self, axis: Axis) -> f32 {
        (self.min(axis) + self.max(axis)) * 0.5
    }

    /// Coordinate of the given side.
    pub fn side(&self, side: Alignment) -> f32 {
        match side {
            Alignment::Left => self.min_x,
            Alignment::Right => self.max_x,
            Alignment::Bottom => self.min_y,
            Alignment::Top => self.max_y,
        }
    }
}

/// Per-tick viewport geometry supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// World-space rectangle of the visible area.
    pub rect: Rect,
    /// World units per content unit (the content frame's transform scale).
    pub scale: f32,
}

impl Viewport {
    pub fn new(rect: Rect) -> Self {
        Self { rect, scale: 1.0 }
    }

    pub fn with_scale(rect: Rect, scale: f32) -> Self {
        Self { rect, scale }
    }

    /// Viewport length along `axis`, in content units.
    pub fn content_extent(&self, axis: Axis) -> f32 {
        self.rect.extent(axis) / self.scale
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Rect::default())
    }
}
