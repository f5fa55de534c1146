/// Last-known drawing-surface rectangle plus factors derived on resize.
///
/// All derived fields relate the new size to the size immediately prior,
/// not to the original: `delta_*` are signed differences, `scale_*` are
/// per-axis ratios, `scale` is the area ratio. Recomputed atomically by
/// [`Viewport::resize`]; read-only everywhere else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub delta_x: f32,
    pub delta_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub scale: f32,
    pub aspect_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            delta_x: 0.0,
            delta_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            scale: 1.0,
            aspect_ratio: width / height,
        }
    }

    /// Recompute the record from the previous one. Callers guarantee
    /// positive dimensions; zero or negative sizes are filtered upstream.
    pub fn resize(&mut self, width: f32, height: f32) {
        let previous = *self;

        *self = Self {
            width,
            height,
            delta_x: width - previous.width,
            delta_y: height - previous.height,
            scale_x: width / previous.width,
            scale_y: height / previous.height,
            scale: (width * height) / (previous.width * previous.height),
            aspect_ratio: width / height,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_viewport_is_identity() {
        let viewport = Viewport::new(1600.0, 900.0);
        assert_eq!(viewport.delta_x, 0.0);
        assert_eq!(viewport.delta_y, 0.0);
        assert_eq!(viewport.scale_x, 1.0);
        assert_eq!(viewport.scale_y, 1.0);
        assert_eq!(viewport.scale, 1.0);
        assert!((viewport.aspect_ratio - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_resize_derives_from_previous_size() {
        let mut viewport = Viewport::new(1000.0, 800.0);
        viewport.resize(500.0, 400.0);

        assert_eq!(viewport.width, 500.0);
        assert_eq!(viewport.height, 400.0);
        assert_eq!(viewport.delta_x, -500.0);
        assert_eq!(viewport.delta_y, -400.0);
        assert_eq!(viewport.scale_x, 0.5);
        assert_eq!(viewport.scale_y, 0.5);
        assert_eq!(viewport.scale, 0.25);
        assert_eq!(viewport.aspect_ratio, 1.25);
    }

    #[test]
    fn test_resize_is_relative_to_immediately_prior() {
        let mut viewport = Viewport::new(1000.0, 1000.0);
        viewport.resize(2000.0, 1000.0);
        viewport.resize(2000.0, 2000.0);

        // Second resize relates to the 2000x1000 state, not the original.
        assert_eq!(viewport.delta_x, 0.0);
        assert_eq!(viewport.delta_y, 1000.0);
        assert_eq!(viewport.scale_x, 1.0);
        assert_eq!(viewport.scale_y, 2.0);
        assert_eq!(viewport.scale, 2.0);
        assert_eq!(viewport.aspect_ratio, 1.0);
    }
}
