use crate::*;

use dynscroll::{
    Alignment, Axis, Edge, ItemsProvider, ListItem, PhysicsState, Rect, ScrollError,
    ScrollOptions, Viewport, Widget, WidgetsProvider,
};

const EXTENT: f32 = 50.0;
const SPACING: f32 = 10.0;
const DT: f32 = 1.0 / 60.0;

#[derive(Clone, Debug)]
struct Row(usize);

impl ListItem for Row {}

struct Rows(usize);

impl ItemsProvider for Rows {
    type Item = Row;

    fn item(&self, index: usize) -> Option<Row> {
        (index < self.0).then_some(Row(index))
    }
}

#[derive(Debug, Default)]
struct RowWidget {
    index: usize,
    position: f32,
}

impl Widget<Row> for RowWidget {
    fn fill(&mut self, item: &Row) {
        self.index = item.0;
    }

    fn extent(&self, _axis: Axis) -> f32 {
        EXTENT
    }

    fn position(&self, _axis: Axis) -> f32 {
        self.position
    }

    fn set_position(&mut self, _axis: Axis, position: f32) {
        self.position = position;
    }

    fn set_visible(&mut self, _visible: bool) {}
}

struct RowWidgets;

impl WidgetsProvider for RowWidgets {
    type Item = Row;
    type Widget = RowWidget;

    fn create_widget(&mut self, _item: &Row) -> RowWidget {
        RowWidget::default()
    }

    fn release_widget(&mut self, _widget: RowWidget) {}
}

fn viewport() -> Viewport {
    Viewport::new(Rect::new(0.0, 0.0, 100.0, 200.0))
}

fn controller(rows: usize) -> Controller<Rows, RowWidgets> {
    let options = ScrollOptions::new(Alignment::Top).with_spacing(SPACING);
    Controller::new(Rows(rows), RowWidgets, viewport(), options).unwrap()
}

fn run_animation(c: &mut Controller<Rows, RowWidgets>) {
    let mut ticks = 0;
    while c.is_animating() {
        c.tick(DT).unwrap();
        ticks += 1;
        assert!(ticks < 1_000, "navigation never finished");
    }
}

#[test]
fn easing_curves_are_monotone_from_zero_to_one() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutQuad,
    ] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        let mut prev = 0.0;
        for step in 1..=20 {
            let v = easing.sample(step as f32 / 20.0);
            assert!(v >= prev, "{easing:?} decreased at step {step}");
            prev = v;
        }
    }
    assert_eq!(Easing::EaseOutQuad.sample(0.5), 0.75);
    assert_eq!(Easing::Linear.sample(2.0), 1.0);
}

#[test]
fn delta_tween_hands_out_exactly_the_total() {
    let mut tween = DeltaTween::new(-75.0, NAVIGATION_DURATION, Easing::EaseOutQuad);
    let mut sum = 0.0;
    let mut prev = f32::NEG_INFINITY;
    while !tween.is_done() {
        let delta = tween.advance(DT);
        assert!(delta <= 0.0);
        // Ease-out: the steps shrink.
        assert!(delta >= prev);
        prev = delta;
        sum += delta;
    }
    assert!((sum + 75.0).abs() < 1e-3);
    assert_eq!(tween.remaining(), 0.0);
    assert_eq!(tween.advance(DT), 0.0);
}

#[test]
fn zero_length_tween_completes_on_first_tick() {
    let mut tween = DeltaTween::new(10.0, 0.0, Easing::Linear);
    assert!(!tween.is_done());
    assert_eq!(tween.advance(DT), 10.0);
    assert!(tween.is_done());
}

#[test]
fn center_on_index_reseeks_outside_window() {
    let mut c = controller(100);
    assert!(!c.list().contains_index(50));

    let total = c.center_on_index(50, false).unwrap();
    assert_eq!(total, -75.0);
    assert!(c.list().contains_index(50));

    let center = c.list().item_center(50).unwrap();
    assert!((center - viewport().rect.center(Axis::Y)).abs() <= SPACING);
    assert!(!c.is_animating());
    assert_eq!(c.list().physics_state(), PhysicsState::Idle);
}

#[test]
fn animated_center_on_index_locks_until_done() {
    let mut c = controller(100);
    assert_eq!(c.center_on_index(50, true), Ok(-75.0));
    assert!(c.is_animating());
    assert_eq!(c.list().physics_state(), PhysicsState::Locked);

    c.tick(DT).unwrap();
    let partial = c.list().layout().position();
    assert!(partial < 0.0 && partial > -75.0);

    run_animation(&mut c);
    assert!((c.list().layout().position() + 75.0).abs() < 1e-3);
    let center = c.list().item_center(50).unwrap();
    assert!((center - 100.0).abs() < 1e-2);
    assert_eq!(c.list().physics_state(), PhysicsState::Idle);
}

#[test]
fn centering_near_the_head_stops_on_the_boundary() {
    let mut c = controller(100);
    assert_eq!(c.center_on_index(0, false), Ok(0.0));
    assert_eq!(c.list().layout().position(), 0.0);
    assert_eq!(c.list().item_center(0), Some(175.0));
}

#[test]
fn centering_near_the_tail_stops_on_the_boundary() {
    let mut c = controller(100);
    assert_eq!(c.center_on_index(99, false), Ok(0.0));
    let list = c.list();
    assert_eq!(list.window().tail(), 99);
    assert_eq!(list.item_center(99), Some(25.0));
    assert_eq!(list.layout().edge_delta(Edge::Tail, &viewport()), 0.0);
    assert_eq!(list.physics_state(), PhysicsState::Idle);
}

#[test]
fn centering_on_a_missing_index_fails_and_unlocks() {
    let mut c = controller(100);
    assert_eq!(
        c.center_on_index(100, false),
        Err(ScrollError::MissingItem(100))
    );
    assert_eq!(c.list().physics_state(), PhysicsState::Idle);
    assert_eq!(c.list().window().range(), Some(0..=3));
}

#[test]
fn centering_without_room_for_a_widget_fails() {
    let options = ScrollOptions::new(Alignment::Top).with_spacing(SPACING);
    let flat = Viewport::new(Rect::new(0.0, 0.0, 100.0, 0.0));
    let mut c = Controller::new(Rows(100), RowWidgets, flat, options).unwrap();
    assert_eq!(
        c.center_on_index(5, false),
        Err(ScrollError::NotMaterialized(5))
    );
    assert!(!c.list().physics().is_locked());
}

#[test]
fn user_input_cancels_navigation() {
    let mut c = controller(100);
    c.center_on_index(50, true).unwrap();
    c.tick(DT).unwrap();

    c.begin_drag().unwrap();
    assert!(!c.is_animating());
    assert_eq!(c.list().physics_state(), PhysicsState::Dragging);

    c.center_on_index(20, true).unwrap();
    c.on_scroll(5.0).unwrap();
    assert!(!c.is_animating());
    assert_eq!(c.list().physics_state(), PhysicsState::Idle);
}

#[test]
fn cancel_leaves_content_where_it_is() {
    let mut c = controller(100);
    c.center_on_index(50, true).unwrap();
    for _ in 0..5 {
        c.tick(DT).unwrap();
    }
    let position = c.list().layout().position();
    c.cancel_animation().unwrap();
    assert_eq!(c.list().layout().position(), position);
    assert_eq!(c.list().physics_state(), PhysicsState::Idle);

    // Without a navigation, tick drives the list physics.
    c.tick(DT).unwrap();
    assert_eq!(c.list().layout().position(), position);
}

#[test]
fn navigation_after_shutdown_is_rejected() {
    let mut c = controller(100);
    c.list_mut().shutdown();
    assert_eq!(c.center_on_index(10, false), Err(ScrollError::ShutDown));
}
