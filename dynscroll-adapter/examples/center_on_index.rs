use dynscroll::{
    Alignment, Axis, ItemsProvider, ListItem, Rect, ScrollOptions, Viewport, Widget,
    WidgetsProvider,
};
use dynscroll_adapter::{Controller, Easing};

struct Row(usize);

impl ListItem for Row {}

struct Rows(usize);

impl ItemsProvider for Rows {
    type Item = Row;

    fn item(&self, index: usize) -> Option<Row> {
        (index < self.0).then_some(Row(index))
    }
}

#[derive(Default)]
struct Label {
    index: usize,
    y: f32,
}

impl Widget<Row> for Label {
    fn fill(&mut self, item: &Row) {
        self.index = item.0;
    }

    fn extent(&self, _axis: Axis) -> f32 {
        // Every tenth row is a section header.
        if self.index % 10 == 0 { 40.0 } else { 24.0 }
    }

    fn position(&self, _axis: Axis) -> f32 {
        self.y
    }

    fn set_position(&mut self, _axis: Axis, position: f32) {
        self.y = position;
    }

    fn set_visible(&mut self, _visible: bool) {}
}

struct Labels;

impl WidgetsProvider for Labels {
    type Item = Row;
    type Widget = Label;

    fn create_widget(&mut self, _item: &Row) -> Label {
        Label::default()
    }

    fn release_widget(&mut self, _widget: Label) {}
}

fn main() {
    // Example: "jump to message" in a long list, animated.
    //
    // An adapter would:
    // - call center_on_index(...) in response to a command
    // - call tick(dt) every frame until is_animating() turns false
    // - read widget positions from the list to render
    let viewport = Viewport::new(Rect::from_origin_size(0.0, 0.0, 200.0, 300.0));
    let options = ScrollOptions::new(Alignment::Top).with_spacing(4.0);
    let mut c = Controller::new(Rows(10_000), Labels, viewport, options)
        .unwrap()
        .with_navigation(0.5, Easing::EaseInOutCubic);

    let total = c.center_on_index(4_321, true).unwrap();
    println!(
        "total={total:.1} window={:?}",
        c.list().window().range()
    );

    let dt = 1.0 / 60.0;
    let mut frame = 0;
    while c.is_animating() {
        c.tick(dt).unwrap();
        frame += 1;
        if frame % 6 == 0 {
            println!(
                "frame={frame} center={:?}",
                c.list().item_center(4_321)
            );
        }
    }

    println!(
        "done: center={:?} viewport_center={}",
        c.list().item_center(4_321),
        viewport.rect.center(Axis::Y)
    );

    // Near the end of the data the list stops on the boundary instead.
    c.center_on_index(9_999, false).unwrap();
    println!(
        "last: center={:?} window={:?}",
        c.list().item_center(9_999),
        c.list().window().range()
    );
}
