//! The top-level gallery controller.
//!
//! Owns all live state (items, background, viewport, pose, selection) plus
//! the tween scheduler driving it, and exposes the operations the UI shell
//! calls: resize, pointer selection, key presses, and per-frame advance.
//! Deliberately free of GTK types so the whole control flow is testable
//! headlessly.

use crate::input::{self, ArrowKey, Selection};
use crate::layout::{Pose, PoseEngine};
use crate::models::{palette_color, MediaItem, SourceBounds, Viewport};
use crate::tween::TweenScheduler;

pub struct Gallery {
    media: Vec<MediaItem>,
    bg: Option<MediaItem>,
    viewport: Viewport,
    engine: PoseEngine,
    scheduler: TweenScheduler,
    selection: Selection,
}

impl Gallery {
    /// Build the gallery from the source-data collaborator's rectangles
    /// (gathered once, never re-read) and apply the initial compact pose.
    pub fn new(source: &[SourceBounds], width: f32, height: f32) -> Self {
        let media: Vec<MediaItem> = source
            .iter()
            .enumerate()
            .map(|(index, bounds)| MediaItem::new(*bounds, palette_color(index)))
            .collect();

        let viewport = Viewport::new(width, height);
        let selection = Selection::default();
        let bg = MediaItem::background(&media, selection.index, &viewport);
        if bg.is_none() {
            tracing::warn!("no source rectangles, background disabled");
        }

        let mut gallery = Self {
            media,
            bg,
            viewport,
            engine: PoseEngine::new(),
            scheduler: TweenScheduler::new(),
            selection,
        };
        gallery.set_pose(Pose::ListCompact, true);
        gallery
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn media(&self) -> &[MediaItem] {
        &self.media
    }

    pub fn background(&self) -> Option<&MediaItem> {
        self.bg.as_ref()
    }

    pub fn active_pose(&self) -> Option<Pose> {
        self.engine.active_pose()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Whether all transitions have run to completion.
    pub fn is_settled(&self) -> bool {
        self.scheduler.is_idle()
    }

    /// Request a pose; the engine's re-entry guard applies unless forced.
    pub fn set_pose(&mut self, pose: Pose, force: bool) -> bool {
        self.engine.apply_pose(
            pose,
            &self.media,
            self.selection.index,
            &self.viewport,
            &mut self.bg,
            force,
            &mut self.scheduler,
        )
    }

    /// Surface resize: recompute the viewport, then force a re-layout of
    /// the active pose. This is not a pose change; selection (and its
    /// `previous`) stay untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
        tracing::debug!(
            width,
            height,
            delta_x = self.viewport.delta_x,
            delta_y = self.viewport.delta_y,
            scale_x = self.viewport.scale_x,
            scale_y = self.viewport.scale_y,
            scale = self.viewport.scale,
            aspect_ratio = self.viewport.aspect_ratio,
            "viewport resized"
        );
        let pose = self.engine.active_pose().unwrap_or(Pose::ListCompact);
        self.set_pose(pose, true);
    }

    /// Pointer click at surface-local coordinates. On a hit, updates the
    /// selection and runs the click transition table; a miss changes
    /// nothing.
    pub fn select_at(&mut self, x: f32, y: f32) -> Option<usize> {
        let index = input::hit_test(x, y, &self.media)?;

        self.selection.select(index);
        tracing::debug!(
            index,
            previous = self.selection.previous,
            "pointer selection"
        );

        if let Some(change) = input::pose_on_select(self.engine.active_pose()) {
            self.set_pose(change.pose, change.force);
        }
        Some(index)
    }

    /// Directional key press, pre-decoded by the input collaborator.
    pub fn key_press(&mut self, key: ArrowKey) {
        if let Some(change) = input::pose_for_key(key) {
            self.set_pose(change.pose, change.force);
        }
    }

    /// Advance all running transitions by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.scheduler.tick(dt, &mut self.media, &mut self.bg);
    }
}
