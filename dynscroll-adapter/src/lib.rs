//! Programmatic navigation for the `dynscroll` crate.
//!
//! The `dynscroll` crate keeps the list filled and scrolls it in response to host input. This
//! crate adds the one workflow that needs extra state across ticks:
//!
//! - Center-on-index: re-seek the window when the target is not materialized, align the target
//!   widget with the viewport center (or the data boundary near either end), optionally
//!   animated over a short, eased duration
//!
//! Like the core crate it is UI-agnostic and driven entirely by `tick(dt)`.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{Controller, NAVIGATION_DURATION};
pub use tween::{DeltaTween, Easing};
