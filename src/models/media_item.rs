use crate::geometry::Rect;
use crate::models::Viewport;

/// A tweenable color. Components are 0-255 but kept as floats so the
/// scheduler can interpolate them like any other channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255.0, 255.0, 255.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Display colors handed out round-robin to gallery items.
pub const PALETTE: [Rgb; 10] = [
    Rgb::new(190.0, 190.0, 190.0),
    Rgb::new(159.0, 202.0, 165.0),
    Rgb::new(200.0, 161.0, 235.0),
    Rgb::new(245.0, 149.0, 171.0),
    Rgb::new(210.0, 128.0, 194.0),
    Rgb::new(204.0, 184.0, 196.0),
    Rgb::new(181.0, 212.0, 227.0),
    Rgb::new(131.0, 202.0, 157.0),
    Rgb::new(139.0, 150.0, 249.0),
    Rgb::new(128.0, 223.0, 239.0),
];

pub fn palette_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

/// One entry of the source-data contract: the bounding rectangle of a
/// gallery item as reported by the surface collaborator, gathered once
/// at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceBounds {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

/// One gallery rectangle: immutable original bounds captured at
/// construction, plus the live animated state the scheduler writes into.
///
/// Items are created once at gallery initialization and index-addressed
/// for the whole session; the index is their identity.
#[derive(Debug, Clone)]
pub struct MediaItem {
    original: Rect,
    /// Live geometry, written by the tween scheduler every frame.
    pub rect: Rect,
    /// Live color. Constant for media items, animated for the background.
    pub color: Rgb,
    /// Live opacity in [0, 1].
    pub alpha: f32,
}

impl MediaItem {
    pub fn new(bounds: SourceBounds, color: Rgb) -> Self {
        let rect = Rect::new(bounds.left, bounds.top, bounds.width, bounds.height);
        Self {
            original: rect,
            rect,
            color,
            alpha: 1.0,
        }
    }

    /// The background rectangle: a copy of the selected item pinned to the
    /// full viewport, starting white. `None` when the gallery is empty,
    /// since there is no item to derive it from.
    pub fn background(items: &[MediaItem], selected: usize, viewport: &Viewport) -> Option<Self> {
        let source = items.get(selected).or_else(|| items.first())?;

        let mut bg = source.clone();
        bg.rect = Rect::new(0.0, 0.0, viewport.width, viewport.height);
        bg.color = Rgb::WHITE;
        Some(bg)
    }

    /// The bounds this item was constructed with; never mutated.
    pub fn original(&self) -> Rect {
        self.original
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        self.rect.contains(px, py)
    }

    pub fn center(&self) -> (f32, f32) {
        self.rect.center()
    }
}
