pub mod window;

pub use window::GalleryWindow;
