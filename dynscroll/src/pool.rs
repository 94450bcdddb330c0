use core::any::TypeId;
use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};
use std::collections::HashMap;

use crate::{ListItem, ScrollError, Widget, WidgetsProvider};

pub(crate) type KindMap<V> = HashMap<TypeId, V>;

static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies a widget owned by a [`WidgetPool`].
///
/// Handles are only meaningful for the pool that issued them and become stale after
/// [`WidgetPool::clear`]. Other pools reject them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetHandle {
    pool: u64,
    kind: TypeId,
    slot: usize,
}

#[derive(Debug)]
struct Slot<T> {
    widget: T,
    active: bool,
}

/// Recycles host widgets by widget kind.
///
/// The first item of a given kind teaches the pool which widget kind renders it. Later
/// acquisitions reuse an inactive widget of that kind before asking the host for a new one.
/// Slots live until the pool is cleared or dropped; dropping the pool hands every widget back to
/// the host.
pub struct WidgetPool<W: WidgetsProvider> {
    id: u64,
    provider: W,
    widget_kinds: KindMap<TypeId>,
    slots: KindMap<Vec<Slot<W::Widget>>>,
}

impl<W: WidgetsProvider> WidgetPool<W> {
    pub fn new(provider: W) -> Self {
        Self {
            id: NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed),
            provider,
            widget_kinds: KindMap::new(),
            slots: KindMap::new(),
        }
    }

    pub fn provider(&self) -> &W {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut W {
        &mut self.provider
    }

    /// Returns an active widget able to display `item`.
    pub fn acquire(&mut self, item: &W::Item) -> WidgetHandle {
        let item_kind = item.kind();
        let handle = match self.widget_kinds.get(&item_kind).copied() {
            None => {
                let widget = self.provider.create_widget(item);
                let kind = widget.kind();
                self.widget_kinds.insert(item_kind, kind);
                vdebug!(?item_kind, widget_kind = ?kind, "WidgetPool: new item kind");
                self.push_slot(kind, widget)
            }
            Some(kind) => {
                let reusable = self
                    .slots
                    .get(&kind)
                    .and_then(|slots| slots.iter().rposition(|slot| !slot.active));
                match reusable {
                    Some(slot) => WidgetHandle {
                        pool: self.id,
                        kind,
                        slot,
                    },
                    None => {
                        let widget = self.provider.create_widget(item);
                        debug_assert!(
                            widget.kind() == kind,
                            "WidgetPool: provider changed widget kind for an item kind"
                        );
                        self.push_slot(kind, widget)
                    }
                }
            }
        };

        if let Some(slot) = self.slot_mut(handle) {
            slot.active = true;
            slot.widget.set_visible(true);
        }
        vtrace!(slot = handle.slot, "WidgetPool::acquire");
        handle
    }

    /// Marks the widget behind `handle` as available and hides it.
    pub fn release(&mut self, handle: WidgetHandle) -> Result<(), ScrollError> {
        let slot = self
            .slot_mut(handle)
            .filter(|slot| slot.active)
            .ok_or(ScrollError::UnknownWidget)?;
        slot.active = false;
        slot.widget.set_visible(false);
        vtrace!(slot = handle.slot, "WidgetPool::release");
        Ok(())
    }

    pub fn get(&self, handle: WidgetHandle) -> Option<&W::Widget> {
        self.slot(handle).map(|slot| &slot.widget)
    }

    pub fn get_mut(&mut self, handle: WidgetHandle) -> Option<&mut W::Widget> {
        self.slot_mut(handle).map(|slot| &mut slot.widget)
    }

    pub fn is_active(&self, handle: WidgetHandle) -> bool {
        self.slot(handle).is_some_and(|slot| slot.active)
    }

    /// Number of widgets currently handed out.
    pub fn active_count(&self) -> usize {
        self.slots
            .values()
            .flat_map(|slots| slots.iter())
            .filter(|slot| slot.active)
            .count()
    }

    /// Number of widgets the pool holds, active or not.
    pub fn slot_count(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// Returns every widget to the host and forgets all kind mappings.
    pub fn clear(&mut self) {
        let released = self.slot_count();
        for (_, slots) in self.slots.drain() {
            for slot in slots {
                self.provider.release_widget(slot.widget);
            }
        }
        self.widget_kinds.clear();
        if released > 0 {
            vdebug!(released, "WidgetPool::clear");
        }
    }

    fn push_slot(&mut self, kind: TypeId, widget: W::Widget) -> WidgetHandle {
        let slots = self.slots.entry(kind).or_default();
        slots.push(Slot {
            widget,
            active: false,
        });
        WidgetHandle {
            pool: self.id,
            kind,
            slot: slots.len() - 1,
        }
    }

    fn slot(&self, handle: WidgetHandle) -> Option<&Slot<W::Widget>> {
        if handle.pool != self.id {
            return None;
        }
        self.slots
            .get(&handle.kind)
            .and_then(|slots| slots.get(handle.slot))
    }

    fn slot_mut(&mut self, handle: WidgetHandle) -> Option<&mut Slot<W::Widget>> {
        if handle.pool != self.id {
            return None;
        }
        self.slots
            .get_mut(&handle.kind)
            .and_then(|slots| slots.get_mut(handle.slot))
    }
}

impl<W: WidgetsProvider> fmt::Debug for WidgetPool<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetPool")
            .field("kinds", &self.widget_kinds.len())
            .field("slots", &self.slot_count())
            .field("active", &self.active_count())
            .finish()
    }
}

impl<W: WidgetsProvider> Drop for WidgetPool<W> {
    fn drop(&mut self) {
        self.clear();
    }
}
