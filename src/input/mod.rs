//! Selection state and the input-to-pose mapping tables.
//!
//! Raw event capture stays in the UI layer; this module only decides what
//! a pointer hit or a directional key means for pose and selection.

use crate::layout::Pose;
use crate::models::MediaItem;

/// The four directional keys the gallery understands, pre-decoded by the
/// input collaborator. Left is decoded but currently unmapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

/// Current and previous selected item indices. `previous` changes only on
/// explicit user selection, never on forced re-layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub index: usize,
    pub previous: usize,
}

impl Selection {
    pub fn select(&mut self, index: usize) {
        self.previous = self.index;
        self.index = index;
    }
}

/// A requested pose change. Non-forced changes are subject to the
/// engine's same-pose re-entry guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoseChange {
    pub pose: Pose,
    pub force: bool,
}

/// Map a pointer position to the item under it, judged against live
/// (animated) rectangles. Later items draw on top of earlier ones, so
/// the last containing item wins.
pub fn hit_test(x: f32, y: f32, items: &[MediaItem]) -> Option<usize> {
    let mut hit = None;
    for (index, item) in items.iter().enumerate() {
        if item.contains(x, y) {
            hit = Some(index);
        }
    }
    hit
}

/// Pose transition taken when an item is clicked. Always forced: even a
/// focus-to-focus "change" must re-center on the new selection.
pub fn pose_on_select(current: Option<Pose>) -> Option<PoseChange> {
    let pose = match current? {
        Pose::ListExpanded => Pose::Focus,
        Pose::ListCompact => Pose::ListExpanded,
        Pose::Focus => Pose::Focus,
    };
    Some(PoseChange { pose, force: true })
}

/// Pose transition taken on a directional key. Non-forced: pressing the
/// active pose's key again does nothing.
pub fn pose_for_key(key: ArrowKey) -> Option<PoseChange> {
    let pose = match key {
        ArrowKey::Up => Pose::ListExpanded,
        ArrowKey::Down => Pose::ListCompact,
        ArrowKey::Right => Pose::Focus,
        ArrowKey::Left => return None,
    };
    Some(PoseChange { pose, force: false })
}
