// Example: a chat feed with two widget kinds, driven by a fake frame loop.
use core::any::TypeId;

use dynscroll::{
    Alignment, Axis, DynamicScrollList, ItemsProvider, ListItem, Rect, ScrollOptions, Viewport,
    Widget, WidgetsProvider,
};

struct Text(String);
struct Sticker(u32);

enum Entry {
    Text(Text),
    Sticker(Sticker),
}

impl ListItem for Entry {
    fn kind(&self) -> TypeId {
        match self {
            Entry::Text(_) => TypeId::of::<Text>(),
            Entry::Sticker(_) => TypeId::of::<Sticker>(),
        }
    }
}

struct Feed {
    len: usize,
}

impl ItemsProvider for Feed {
    type Item = Entry;

    fn item(&self, index: usize) -> Option<Entry> {
        if index >= self.len {
            return None;
        }
        Some(if index % 5 == 4 {
            Entry::Sticker(Sticker(index as u32))
        } else {
            Entry::Text(Text(format!("message #{index}")))
        })
    }
}

struct Cell {
    kind: TypeId,
    label: String,
    lines: usize,
    y: f32,
}

impl Widget<Entry> for Cell {
    fn kind(&self) -> TypeId {
        self.kind
    }

    fn fill(&mut self, item: &Entry) {
        match item {
            Entry::Text(Text(text)) => {
                self.lines = 1 + text.len() / 12;
                self.label.clone_from(text);
            }
            Entry::Sticker(Sticker(id)) => {
                self.lines = 4;
                self.label = format!("sticker {id}");
            }
        }
    }

    fn extent(&self, _axis: Axis) -> f32 {
        self.lines as f32 * 18.0
    }

    fn position(&self, _axis: Axis) -> f32 {
        self.y
    }

    fn set_position(&mut self, _axis: Axis, position: f32) {
        self.y = position;
    }

    fn set_visible(&mut self, _visible: bool) {}
}

#[derive(Default)]
struct Cells {
    created: usize,
}

impl WidgetsProvider for Cells {
    type Item = Entry;
    type Widget = Cell;

    fn create_widget(&mut self, item: &Entry) -> Cell {
        self.created += 1;
        Cell {
            kind: item.kind(),
            label: String::new(),
            lines: 1,
            y: 0.0,
        }
    }

    fn release_widget(&mut self, _widget: Cell) {}
}

fn main() {
    let viewport = Viewport::new(Rect::from_origin_size(0.0, 0.0, 320.0, 240.0));
    let options = ScrollOptions::new(Alignment::Top).with_spacing(6.0);
    let mut list =
        DynamicScrollList::new(Feed { len: 1_000 }, Cells::default(), viewport, options).unwrap();

    // A flick: a short drag followed by inertia.
    list.begin_drag().unwrap();
    for _ in 0..6 {
        list.drag(25.0).unwrap();
    }
    list.end_drag(0.0).unwrap();

    let dt = 1.0 / 60.0;
    for frame in 0..240 {
        list.tick(dt).unwrap();
        if frame % 40 == 0 {
            println!(
                "frame={frame} state={:?} window={:?} position={:.1}",
                list.physics_state(),
                list.window().range(),
                list.layout().position()
            );
        }
    }

    for cell in list.layout().widgets() {
        println!("  y={:>8.1} {}", cell.y, cell.label);
    }
    println!(
        "widgets created: {}",
        list.layout().pool().provider().created
    );
}
