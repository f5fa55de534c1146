//! Pose layout computation and the transition engine driving it.
//!
//! Every pose follows the same shape: compute per-item target rectangles
//! starting from x = 0, then shift everything so the selected item sits
//! horizontally centered in the viewport. The engine turns those targets
//! into tween requests with pose-specific timing; the scheduler's
//! overwrite rule keeps overlapping transitions consistent.

use crate::geometry::clamp;
use crate::layout::pose::*;
use crate::models::{MediaItem, Rgb, Viewport};
use crate::tween::{Easing, TweenProps, TweenRequest, TweenScheduler, TweenTarget};

/// Compute the target layout for a pose: one [`TargetRect`] per item, in
/// item order, already centered on `selected`. An out-of-range selection
/// leaves the layout uncentered (offset zero) rather than failing.
pub fn compute_layout(
    pose: Pose,
    items: &[MediaItem],
    selected: usize,
    viewport: &Viewport,
) -> Vec<TargetRect> {
    let mut targets = match pose {
        Pose::ListCompact => {
            let width = viewport.height * THUMB_WIDTH_RATIO;
            let height = viewport.height * THUMB_HEIGHT_RATIO;
            let y = viewport.height - height - COMPACT_BOTTOM_MARGIN;
            strip_targets(items.len(), width, height, y)
        }
        Pose::ListExpanded => {
            let width = viewport.height * THUMB_WIDTH_RATIO;
            let height =
                viewport.height * (THUMB_HEIGHT_RATIO * EXPANDED_HEIGHT_FACTOR) - MEDIA_PADDING * 2.0;
            let y = (viewport.height - height) * 0.5;
            strip_targets(items.len(), width, height, y)
        }
        Pose::Focus => focus_targets(items.len(), selected, viewport),
    };

    let offset = match targets.get(selected) {
        Some(target) => target.x + target.width * 0.5 - viewport.width * 0.5,
        None => 0.0,
    };
    for target in &mut targets {
        target.x -= offset;
    }

    targets
}

/// Uniform left-to-right strip used by both list poses: every item gets
/// the same size, separated by the fixed media padding, item 0 at x = 0.
fn strip_targets(count: usize, width: f32, height: f32, y: f32) -> Vec<TargetRect> {
    (0..count)
        .map(|i| TargetRect {
            x: i as f32 * (width + MEDIA_PADDING),
            y,
            width,
            height,
            alpha: 1.0,
        })
        .collect()
}

/// Focus pose: fixed 16:9 hero size, non-selected items at half width and
/// dimmed, packed left-to-right against the previous item's right edge
/// with a viewport-scaled padding.
fn focus_targets(count: usize, selected: usize, viewport: &Viewport) -> Vec<TargetRect> {
    let width = clamp(
        viewport.width * (THUMB_WIDTH_RATIO * FOCUS_WIDTH_FACTOR) - MEDIA_PADDING * 2.0,
        FOCUS_MIN_WIDTH,
        FOCUS_MAX_WIDTH,
    );
    let height = width * (9.0 / 16.0);
    let y = (viewport.height - height) * 0.5;
    let padding = viewport.width * THUMB_WIDTH_RATIO;

    let mut targets: Vec<TargetRect> = Vec::with_capacity(count);
    for i in 0..count {
        let (item_width, alpha) = if i == selected {
            (width, 1.0)
        } else {
            (width * FOCUS_DIMMED_SCALE, FOCUS_DIMMED_ALPHA)
        };

        // Packing uses the already-halved widths of dimmed items.
        let x = match targets.last() {
            Some(previous) => previous.x + previous.width + padding,
            None => 0.0,
        };

        targets.push(TargetRect {
            x,
            y,
            width: item_width,
            height,
            alpha,
        });
    }
    targets
}

/// Owns the active/previous pose pair and turns pose changes into tween
/// requests. The pose state machine itself (what a click or key maps to)
/// lives in [`crate::input`].
#[derive(Debug, Default)]
pub struct PoseEngine {
    active: Option<Pose>,
    previous: Option<Pose>,
}

impl PoseEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_pose(&self) -> Option<Pose> {
        self.active
    }

    pub fn previous_pose(&self) -> Option<Pose> {
        self.previous
    }

    /// Compute the target layout for `pose` and hand every item (and the
    /// background) to the scheduler. Returns `false` without touching
    /// anything when the pose is already active and `force` is not set,
    /// so repeated identical requests never restart a transition.
    #[allow(clippy::too_many_arguments)]
    pub fn apply_pose(
        &mut self,
        pose: Pose,
        items: &[MediaItem],
        selected: usize,
        viewport: &Viewport,
        bg: &mut Option<MediaItem>,
        force: bool,
        scheduler: &mut TweenScheduler,
    ) -> bool {
        if self.active == Some(pose) && !force {
            tracing::debug!(?pose, "pose already active, ignoring");
            return false;
        }

        if !items.is_empty() && selected >= items.len() {
            tracing::warn!(
                selected,
                count = items.len(),
                "selected index out of range, layout left uncentered"
            );
        }

        self.previous = self.active;
        self.active = Some(pose);

        // The background snaps to the full viewport before its color
        // animates; only the color ever tweens.
        if let Some(bg) = bg.as_mut() {
            bg.rect.x = 0.0;
            bg.rect.y = 0.0;
            bg.rect.width = viewport.width;
            bg.rect.height = viewport.height;
        }

        let targets = compute_layout(pose, items, selected, viewport);

        let bg_color = match pose {
            Pose::ListCompact | Pose::ListExpanded => Some(Rgb::WHITE),
            Pose::Focus => items.get(selected).map(|item| item.color),
        };
        if bg.is_some() {
            if let Some(color) = bg_color {
                scheduler.schedule(TweenRequest {
                    target: TweenTarget::Background,
                    props: TweenProps {
                        color: Some(color),
                        ..TweenProps::default()
                    },
                    duration: LIST_DURATION,
                    delay: 0.0,
                    easing: Easing::ExpoOut,
                });
            }
        }

        for (i, target) in targets.iter().enumerate() {
            scheduler.schedule(TweenRequest {
                target: TweenTarget::Media(i),
                props: TweenProps {
                    x: Some(target.x),
                    y: Some(target.y),
                    width: Some(target.width),
                    height: Some(target.height),
                    alpha: Some(target.alpha),
                    color: None,
                },
                duration: pose.duration(),
                delay: pose.stagger(i),
                easing: Easing::ExpoOut,
            });
        }

        tracing::debug!(
            ?pose,
            previous = ?self.previous,
            selected,
            items = targets.len(),
            "pose applied"
        );
        true
    }
}
