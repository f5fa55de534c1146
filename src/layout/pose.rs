/// Horizontal padding between items in the list poses, in surface units.
pub const MEDIA_PADDING: f32 = 16.0;

/// Bottom margin of the compact strip.
pub const COMPACT_BOTTOM_MARGIN: f32 = 48.0;

/// Thumbnail width as a fraction of the reference viewport dimension.
pub const THUMB_WIDTH_RATIO: f32 = 0.079285725;

/// Thumbnail height as a fraction of the viewport height.
pub const THUMB_HEIGHT_RATIO: f32 = 0.04214285;

/// Height multiplier of the expanded strip relative to the compact one.
pub const EXPANDED_HEIGHT_FACTOR: f32 = 7.65;

/// Width multiplier of the focused item relative to the thumbnail ratio.
pub const FOCUS_WIDTH_FACTOR: f32 = 8.5;

/// Clamp bounds for the focused item width.
pub const FOCUS_MIN_WIDTH: f32 = 200.0;
pub const FOCUS_MAX_WIDTH: f32 = 900.0;

/// Width and opacity applied to the non-selected items of the focus pose.
pub const FOCUS_DIMMED_SCALE: f32 = 0.5;
pub const FOCUS_DIMMED_ALPHA: f32 = 0.35;

/// Transition timing per pose, in seconds.
pub const LIST_DURATION: f32 = 1.0;
pub const FOCUS_DURATION: f32 = 1.13;
pub const COMPACT_STAGGER: f32 = 0.015;
pub const EXPANDED_STAGGER: f32 = 0.01;

/// One of the three gallery arrangements. Exactly one is active at a
/// time once the gallery has been laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    /// Single row of small thumbnails anchored near the bottom edge.
    ListCompact,
    /// Single row of larger thumbnails, vertically centered.
    ListExpanded,
    /// One item emphasized at 16:9; the rest shrunk and faded.
    Focus,
}

impl Pose {
    /// Transition duration for this pose, in seconds.
    pub fn duration(self) -> f32 {
        match self {
            Pose::ListCompact | Pose::ListExpanded => LIST_DURATION,
            Pose::Focus => FOCUS_DURATION,
        }
    }

    /// Per-item start delay; the focus pose moves everything at once.
    pub fn stagger(self, index: usize) -> f32 {
        match self {
            Pose::ListCompact => index as f32 * COMPACT_STAGGER,
            Pose::ListExpanded => index as f32 * EXPANDED_STAGGER,
            Pose::Focus => 0.0,
        }
    }
}

/// Target geometry and opacity for one item, aligned by index with the
/// media list. Transient: computed per pose change, handed to the
/// scheduler, then discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alpha: f32,
}
