/// Easing curves mapping normalized time `t` in [0, 1] to progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Decelerating exponential: fast start, long settle.
    ExpoOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::ExpoOut => {
                if t >= 1.0 {
                    // 2^-10 leaves a visible residue; land exactly.
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }
}
