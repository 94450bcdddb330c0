//! A headless recycling scroll list.
//!
//! Given an unbounded sequence of items and a fixed-size viewport, this crate materializes
//! widgets only for the items intersecting the viewport, recycles widgets as items scroll out,
//! and drives the scroll position through drag, inertia and elastic-boundary physics.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - an [`ItemsProvider`] returning items by index (`None` marks the end of the data)
//! - a [`WidgetsProvider`] creating and taking back [`Widget`]s
//! - per-frame viewport geometry ([`Viewport`]), `tick(dt)` calls and drag deltas
//!
//! The pieces, leaves first:
//! - [`IndexWindow`]: the contiguous `[head, tail]` range of materialized indices
//! - [`WidgetPool`]: widget reuse keyed by widget kind
//! - [`ContentLayout`]: widget placement inside a moving content frame
//! - [`ScrollPhysics`]: drag, coasting and rubber-band resistance
//! - [`DynamicScrollList`]: ties them together, one fill/evict pass per delta
//!
//! For programmatic centering on an index, see the `dynscroll-adapter` crate.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod error;
mod layout;
mod list;
mod options;
mod physics;
mod pool;
mod provider;
mod types;
mod window;


pub use error::ScrollError;
pub use layout::ContentLayout;
pub use list::DynamicScrollList;
pub use options::ScrollOptions;
pub use physics::{PhysicsState, ScrollPhysics};
pub use pool::{WidgetHandle, WidgetPool};
pub use provider::{ItemsProvider, ListItem, Widget, WidgetsProvider};
pub use types::{Alignment, Axis, EPSILON, Edge, Rect, Viewport};
pub use window::IndexWindow;
