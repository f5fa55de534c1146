// Gallery window: GTK4 ApplicationWindow hosting the drawing surface.
//
// This is the external-collaborator layer around the headless gallery
// core: it captures raw input (clicks, arrow keys, resizes), drives the
// scheduler from the frame clock, and paints live state every frame.

use gdk4::Key;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea, EventControllerKey, GestureClick};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use crate::error::GalleryError;
use crate::gallery::Gallery;
use crate::geometry::Debouncer;
use crate::input::ArrowKey;
use crate::models::SourceBounds;

const DEFAULT_WIDTH: i32 = 1280;
const DEFAULT_HEIGHT: i32 = 800;
const DEMO_ITEM_COUNT: usize = 10;
const RESIZE_QUIET_PERIOD: Duration = Duration::from_millis(150);

/// The source-data collaborator: one bounding rectangle per gallery item,
/// gathered once at startup. A fixed strip stands in for scraping a page.
fn demo_source_bounds() -> Vec<SourceBounds> {
    (0..DEMO_ITEM_COUNT)
        .map(|i| SourceBounds {
            top: 24.0,
            left: 24.0 + 140.0 * i as f32,
            width: 120.0,
            height: 80.0,
        })
        .collect()
}

pub struct GalleryWindow {
    window: ApplicationWindow,
    canvas: DrawingArea,
    gallery: RefCell<Gallery>,
    /// The single frame-loop handle: started on construction, removed on
    /// close. `None` once torn down.
    frame_handle: RefCell<Option<gtk4::TickCallbackId>>,
    last_frame_time: Cell<Option<i64>>,
    resize_debounce: RefCell<Debouncer>,
    pending_size: Cell<(f32, f32)>,
    self_weak: RefCell<Weak<Self>>,
}

impl GalleryWindow {
    pub fn new(app: &Application) -> Result<Rc<Self>, GalleryError> {
        if gdk4::Display::default().is_none() {
            return Err(GalleryError::UnsupportedSurface(
                "no display available".into(),
            ));
        }

        let canvas = DrawingArea::builder()
            .hexpand(true)
            .vexpand(true)
            .focusable(true)
            .build();

        let window = ApplicationWindow::builder()
            .application(app)
            .title("triptych")
            .default_width(DEFAULT_WIDTH)
            .default_height(DEFAULT_HEIGHT)
            .child(&canvas)
            .build();

        let gallery = Gallery::new(
            &demo_source_bounds(),
            DEFAULT_WIDTH as f32,
            DEFAULT_HEIGHT as f32,
        );

        let this = Rc::new(Self {
            window,
            canvas,
            gallery: RefCell::new(gallery),
            frame_handle: RefCell::new(None),
            last_frame_time: Cell::new(None),
            resize_debounce: RefCell::new(Debouncer::new(RESIZE_QUIET_PERIOD)),
            pending_size: Cell::new((DEFAULT_WIDTH as f32, DEFAULT_HEIGHT as f32)),
            self_weak: RefCell::new(Weak::new()),
        });
        *this.self_weak.borrow_mut() = Rc::downgrade(&this);

        this.setup_draw();
        this.setup_pointer();
        this.setup_keys();
        this.setup_resize();
        this.start_frame();

        let weak_self = Rc::downgrade(&this);
        this.window.connect_close_request(move |_| {
            if let Some(window) = weak_self.upgrade() {
                window.stop_frame();
            }
            glib::Propagation::Proceed
        });

        Ok(this)
    }

    pub fn present(&self) {
        self.window.present();
    }

    /// Start the per-frame callback. The handle is owned here so teardown
    /// can cancel it deterministically.
    fn start_frame(self: &Rc<Self>) {
        if self.frame_handle.borrow().is_some() {
            return;
        }
        let weak_self = Rc::downgrade(self);
        let id = self.canvas.add_tick_callback(move |widget, clock| {
            if let Some(window) = weak_self.upgrade() {
                window.on_frame(clock.frame_time());
                widget.queue_draw();
            }
            glib::ControlFlow::Continue
        });
        *self.frame_handle.borrow_mut() = Some(id);
    }

    fn stop_frame(&self) {
        if let Some(id) = self.frame_handle.borrow_mut().take() {
            id.remove();
        }
        self.last_frame_time.set(None);
    }

    /// One frame: advance transitions by the frame-clock delta and flush
    /// any debounced resize. Never blocks.
    fn on_frame(&self, frame_time_us: i64) {
        let dt = match self.last_frame_time.replace(Some(frame_time_us)) {
            Some(previous) => (frame_time_us - previous).max(0) as f32 / 1_000_000.0,
            None => 0.0,
        };

        let mut gallery = self.gallery.borrow_mut();
        gallery.advance(dt);

        if self.resize_debounce.borrow_mut().fire(Instant::now()) {
            let (width, height) = self.pending_size.get();
            tracing::debug!(width, height, "debounced resize, re-laying out");
            gallery.resize(width, height);
        }
    }

    fn setup_draw(self: &Rc<Self>) {
        let weak_self = Rc::downgrade(self);
        self.canvas.set_draw_func(move |_, cr, _width, _height| {
            let Some(window) = weak_self.upgrade() else {
                return;
            };
            let gallery = window.gallery.borrow();

            if let Some(bg) = gallery.background() {
                cr.set_source_rgb(
                    f64::from(bg.color.r) / 255.0,
                    f64::from(bg.color.g) / 255.0,
                    f64::from(bg.color.b) / 255.0,
                );
                cr.rectangle(
                    f64::from(bg.rect.x),
                    f64::from(bg.rect.y),
                    f64::from(bg.rect.width),
                    f64::from(bg.rect.height),
                );
                let _ = cr.fill();
            }

            for item in gallery.media() {
                cr.set_source_rgba(0.5, 0.5, 0.5, f64::from(item.alpha));
                cr.rectangle(
                    f64::from(item.rect.x),
                    f64::from(item.rect.y),
                    f64::from(item.rect.width),
                    f64::from(item.rect.height),
                );
                let _ = cr.fill();
            }
        });
    }

    fn setup_pointer(self: &Rc<Self>) {
        let click = GestureClick::new();
        let weak_self = Rc::downgrade(self);
        click.connect_pressed(move |_, _, x, y| {
            if let Some(window) = weak_self.upgrade() {
                let _ = window.gallery.borrow_mut().select_at(x as f32, y as f32);
            }
        });
        self.canvas.add_controller(click);
    }

    fn setup_keys(self: &Rc<Self>) {
        let keys = EventControllerKey::new();
        let weak_self = Rc::downgrade(self);
        keys.connect_key_pressed(move |_, key, _, _| {
            let arrow = match key {
                Key::Up => ArrowKey::Up,
                Key::Down => ArrowKey::Down,
                Key::Left => ArrowKey::Left,
                Key::Right => ArrowKey::Right,
                _ => return glib::Propagation::Proceed,
            };
            if let Some(window) = weak_self.upgrade() {
                window.gallery.borrow_mut().key_press(arrow);
            }
            glib::Propagation::Stop
        });
        self.window.add_controller(keys);
    }

    /// Resize bursts are collapsed into one re-layout after a quiet
    /// period; intermediate allocations only update the pending size.
    fn setup_resize(self: &Rc<Self>) {
        let weak_self = Rc::downgrade(self);
        self.canvas.connect_resize(move |_, width, height| {
            if width <= 0 || height <= 0 {
                return;
            }
            if let Some(window) = weak_self.upgrade() {
                window.pending_size.set((width as f32, height as f32));
                window.resize_debounce.borrow_mut().trigger(Instant::now());
            }
        });
    }
}
