use core::any::{Any, TypeId};

use crate::Axis;

/// A data record shown by the list.
///
/// The list never looks inside an item. Its only use of the item is [`ListItem::kind`], which
/// selects the widget pool bucket. Enum-shaped items should override it to return the type id
/// of the active variant's payload so each variant gets its own widget kind.
pub trait ListItem: Any {
    fn kind(&self) -> TypeId {
        TypeId::of::<Self>()
    }
}

/// Host-side source of items.
pub trait ItemsProvider {
    type Item: ListItem;

    /// Returns the item at `index`, or `None` when there is none (yet).
    ///
    /// `None` is treated as a hard boundary for the current tick.
    fn item(&self, index: usize) -> Option<Self::Item>;

    fn contains(&self, index: usize) -> bool {
        self.item(index).is_some()
    }
}

/// A host widget managed by the pool.
///
/// The list only reads and writes geometry along the scroll axis. `position` is the
/// content-local coordinate of the widget's edge on the alignment side, and `extent` its length
/// along the axis after [`Widget::recalc`].
pub trait Widget<I>: Any {
    /// Pool bucket key. Widgets of different kinds are never handed out for one another.
    fn kind(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn fill(&mut self, item: &I);

    /// Host layout pass run after [`Widget::fill`] and before the extent is read.
    fn recalc(&mut self) {}

    fn extent(&self, axis: Axis) -> f32;

    fn position(&self, axis: Axis) -> f32;

    fn set_position(&mut self, axis: Axis, position: f32);

    fn set_visible(&mut self, visible: bool);
}

/// Host-side widget factory.
pub trait WidgetsProvider {
    type Item: ListItem;
    type Widget: Widget<Self::Item>;

    /// Creates a new widget able to display `item`.
    fn create_widget(&mut self, item: &Self::Item) -> Self::Widget;

    /// Takes back a widget the pool no longer needs. Destroying it or pooling it further is up to
    /// the host.
    fn release_widget(&mut self, widget: Self::Widget);
}
