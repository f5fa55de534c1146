pub mod easing;
pub mod scheduler;

pub use easing::*;
pub use scheduler::*;
