pub mod engine;
pub mod pose;

pub use engine::*;
pub use pose::*;
