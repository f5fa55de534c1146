pub mod media_item;
pub mod viewport;

pub use media_item::*;
pub use viewport::*;
