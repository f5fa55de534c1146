//! Property tween scheduler with overwrite semantics.
//!
//! Pose changes can arrive faster than the previous transition completes.
//! Scheduling a request strips the channels it animates from every
//! pending or running tween on the same target, so two tweens never fight
//! over one property. A tween otherwise always runs to completion; there
//! are no timeouts and no cancellation beyond supersession.

use crate::models::{MediaItem, Rgb};
use crate::tween::Easing;

/// Stable identity of an animatable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenTarget {
    /// A media item, addressed by its gallery index.
    Media(usize),
    /// The background rectangle.
    Background,
}

/// Per-channel goal values. `None` means the channel is not animated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TweenProps {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub alpha: Option<f32>,
    pub color: Option<Rgb>,
}

impl TweenProps {
    pub fn is_empty(&self) -> bool {
        self.x.is_none()
            && self.y.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.alpha.is_none()
            && self.color.is_none()
    }

    /// Remove every channel that `other` animates.
    fn strip(&mut self, other: &TweenProps) {
        if other.x.is_some() {
            self.x = None;
        }
        if other.y.is_some() {
            self.y = None;
        }
        if other.width.is_some() {
            self.width = None;
        }
        if other.height.is_some() {
            self.height = None;
        }
        if other.alpha.is_some() {
            self.alpha = None;
        }
        if other.color.is_some() {
            self.color = None;
        }
    }

    /// Snapshot the item's current values for the channels `goals` animates.
    fn capture(item: &MediaItem, goals: &TweenProps) -> TweenProps {
        TweenProps {
            x: goals.x.map(|_| item.rect.x),
            y: goals.y.map(|_| item.rect.y),
            width: goals.width.map(|_| item.rect.width),
            height: goals.height.map(|_| item.rect.height),
            alpha: goals.alpha.map(|_| item.alpha),
            color: goals.color.map(|_| item.color),
        }
    }
}

/// An interpolation request in the shape the layout engine emits:
/// target object, goal properties, duration, start delay, easing.
/// Overwrite-on-retarget is implied; it is not opt-in.
#[derive(Debug, Clone, Copy)]
pub struct TweenRequest {
    pub target: TweenTarget,
    pub props: TweenProps,
    /// Seconds.
    pub duration: f32,
    /// Seconds before the tween starts moving.
    pub delay: f32,
    pub easing: Easing,
}

#[derive(Debug)]
struct ActiveTween {
    target: TweenTarget,
    goals: TweenProps,
    duration: f32,
    delay: f32,
    easing: Easing,
    elapsed: f32,
    /// Captured on the first frame past the delay, so a delayed tween
    /// starts from wherever the value actually is at that moment.
    start: Option<TweenProps>,
}

#[derive(Debug, Default)]
pub struct TweenScheduler {
    tweens: Vec<ActiveTween>,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self { tweens: Vec::new() }
    }

    /// Number of pending or running tweens.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Queue a tween, superseding conflicting channels of earlier tweens
    /// on the same target. Tweens left with no channels are dropped.
    pub fn schedule(&mut self, request: TweenRequest) {
        self.tweens.retain_mut(|tween| {
            if tween.target != request.target {
                return true;
            }
            tween.goals.strip(&request.props);
            if let Some(start) = tween.start.as_mut() {
                start.strip(&request.props);
            }
            !tween.goals.is_empty()
        });

        if request.props.is_empty() {
            return;
        }

        self.tweens.push(ActiveTween {
            target: request.target,
            goals: request.props,
            duration: request.duration,
            delay: request.delay,
            easing: request.easing,
            elapsed: 0.0,
            start: None,
        });
    }

    /// Advance every tween by `dt` seconds, writing interpolated values
    /// into the live state. Finished tweens land exactly on their goals
    /// and are retired; tweens whose target no longer resolves (index out
    /// of range, missing background) are dropped without effect.
    pub fn tick(&mut self, dt: f32, media: &mut [MediaItem], bg: &mut Option<MediaItem>) {
        for tween in &mut self.tweens {
            tween.elapsed += dt;

            let active = tween.elapsed - tween.delay;
            if active < 0.0 {
                continue;
            }

            let item = match tween.target {
                TweenTarget::Media(index) => match media.get_mut(index) {
                    Some(item) => item,
                    None => continue,
                },
                TweenTarget::Background => match bg.as_mut() {
                    Some(item) => item,
                    None => continue,
                },
            };

            let start = match &tween.start {
                Some(start) => *start,
                None => {
                    let captured = TweenProps::capture(item, &tween.goals);
                    tween.start = Some(captured);
                    captured
                }
            };

            let t = if tween.duration > 0.0 {
                (active / tween.duration).min(1.0)
            } else {
                1.0
            };
            let eased = tween.easing.apply(t);

            if let (Some(from), Some(to)) = (start.x, tween.goals.x) {
                item.rect.x = lerp(from, to, eased);
            }
            if let (Some(from), Some(to)) = (start.y, tween.goals.y) {
                item.rect.y = lerp(from, to, eased);
            }
            if let (Some(from), Some(to)) = (start.width, tween.goals.width) {
                item.rect.width = lerp(from, to, eased);
            }
            if let (Some(from), Some(to)) = (start.height, tween.goals.height) {
                item.rect.height = lerp(from, to, eased);
            }
            if let (Some(from), Some(to)) = (start.alpha, tween.goals.alpha) {
                item.alpha = lerp(from, to, eased);
            }
            if let (Some(from), Some(to)) = (start.color, tween.goals.color) {
                item.color = Rgb::new(
                    lerp(from.r, to.r, eased),
                    lerp(from.g, to.g, eased),
                    lerp(from.b, to.b, eased),
                );
            }
        }

        let media_len = media.len();
        let has_bg = bg.is_some();
        self.tweens.retain(|tween| {
            let resolvable = match tween.target {
                TweenTarget::Media(index) => index < media_len,
                TweenTarget::Background => has_bg,
            };
            resolvable && tween.elapsed - tween.delay < tween.duration
        });
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{palette_color, SourceBounds};

    fn make_item(x: f32, y: f32, width: f32, height: f32) -> MediaItem {
        MediaItem::new(
            SourceBounds {
                top: y,
                left: x,
                width,
                height,
            },
            palette_color(0),
        )
    }

    fn move_x(target: TweenTarget, to: f32, duration: f32, delay: f32) -> TweenRequest {
        TweenRequest {
            target,
            props: TweenProps {
                x: Some(to),
                ..TweenProps::default()
            },
            duration,
            delay,
            easing: Easing::Linear,
        }
    }

    #[test]
    fn test_tween_reaches_exact_goal() {
        let mut media = vec![make_item(0.0, 0.0, 10.0, 10.0)];
        let mut bg = None;
        let mut scheduler = TweenScheduler::new();

        scheduler.schedule(move_x(TweenTarget::Media(0), 100.0, 1.0, 0.0));
        for _ in 0..70 {
            scheduler.tick(1.0 / 60.0, &mut media, &mut bg);
        }

        assert_eq!(media[0].rect.x, 100.0);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_linear_midpoint() {
        let mut media = vec![make_item(0.0, 0.0, 10.0, 10.0)];
        let mut bg = None;
        let mut scheduler = TweenScheduler::new();

        scheduler.schedule(move_x(TweenTarget::Media(0), 100.0, 1.0, 0.0));
        scheduler.tick(0.5, &mut media, &mut bg);

        assert!((media[0].rect.x - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_overwrite_supersedes_conflicting_tween() {
        let mut media = vec![make_item(0.0, 0.0, 10.0, 10.0)];
        let mut bg = None;
        let mut scheduler = TweenScheduler::new();

        scheduler.schedule(move_x(TweenTarget::Media(0), 100.0, 1.0, 0.0));
        scheduler.tick(0.25, &mut media, &mut bg);

        // Retarget mid-flight: the first tween must leave no residue.
        scheduler.schedule(move_x(TweenTarget::Media(0), -40.0, 1.0, 0.0));
        assert_eq!(scheduler.len(), 1);

        for _ in 0..70 {
            scheduler.tick(1.0 / 60.0, &mut media, &mut bg);
        }
        assert_eq!(media[0].rect.x, -40.0);
    }

    #[test]
    fn test_overwrite_is_per_channel() {
        let mut media = vec![make_item(0.0, 0.0, 10.0, 10.0)];
        let mut bg = None;
        let mut scheduler = TweenScheduler::new();

        scheduler.schedule(TweenRequest {
            target: TweenTarget::Media(0),
            props: TweenProps {
                x: Some(100.0),
                alpha: Some(0.0),
                ..TweenProps::default()
            },
            duration: 1.0,
            delay: 0.0,
            easing: Easing::Linear,
        });

        // Only x is retargeted; the alpha channel keeps running.
        scheduler.schedule(move_x(TweenTarget::Media(0), 7.0, 1.0, 0.0));
        assert_eq!(scheduler.len(), 2);

        for _ in 0..70 {
            scheduler.tick(1.0 / 60.0, &mut media, &mut bg);
        }
        assert_eq!(media[0].rect.x, 7.0);
        assert_eq!(media[0].alpha, 0.0);
    }

    #[test]
    fn test_overwrite_applies_to_other_targets_independently() {
        let mut media = vec![make_item(0.0, 0.0, 10.0, 10.0), make_item(0.0, 0.0, 10.0, 10.0)];
        let mut bg = None;
        let mut scheduler = TweenScheduler::new();

        scheduler.schedule(move_x(TweenTarget::Media(0), 100.0, 1.0, 0.0));
        scheduler.schedule(move_x(TweenTarget::Media(1), 200.0, 1.0, 0.0));
        assert_eq!(scheduler.len(), 2);

        for _ in 0..70 {
            scheduler.tick(1.0 / 60.0, &mut media, &mut bg);
        }
        assert_eq!(media[0].rect.x, 100.0);
        assert_eq!(media[1].rect.x, 200.0);
    }

    #[test]
    fn test_delay_captures_start_when_motion_begins() {
        let mut media = vec![make_item(0.0, 0.0, 10.0, 10.0)];
        let mut bg = None;
        let mut scheduler = TweenScheduler::new();

        scheduler.schedule(move_x(TweenTarget::Media(0), 100.0, 1.0, 0.5));

        // Something else moves the item while the tween is still delayed.
        scheduler.tick(0.25, &mut media, &mut bg);
        assert_eq!(media[0].rect.x, 0.0);
        media[0].rect.x = 60.0;

        // Past the delay: interpolates from 60, not from 0.
        scheduler.tick(0.75, &mut media, &mut bg);
        assert!((media[0].rect.x - 80.0).abs() < 1e-4);

        scheduler.tick(1.0, &mut media, &mut bg);
        assert_eq!(media[0].rect.x, 100.0);
    }

    #[test]
    fn test_color_tween_on_background() {
        let mut media = vec![make_item(0.0, 0.0, 10.0, 10.0)];
        let mut bg = Some(make_item(0.0, 0.0, 500.0, 500.0));
        let mut scheduler = TweenScheduler::new();
        bg.as_mut().unwrap().color = Rgb::WHITE;

        scheduler.schedule(TweenRequest {
            target: TweenTarget::Background,
            props: TweenProps {
                color: Some(Rgb::new(55.0, 155.0, 255.0)),
                ..TweenProps::default()
            },
            duration: 1.0,
            delay: 0.0,
            easing: Easing::Linear,
        });
        scheduler.tick(0.5, &mut media, &mut bg);

        let color = bg.as_ref().unwrap().color;
        assert!((color.r - 155.0).abs() < 1e-3);
        assert!((color.g - 205.0).abs() < 1e-3);
        assert!((color.b - 255.0).abs() < 1e-3);
    }

    #[test]
    fn test_unresolvable_targets_are_dropped() {
        let mut media = vec![make_item(0.0, 0.0, 10.0, 10.0)];
        let mut bg = None;
        let mut scheduler = TweenScheduler::new();

        scheduler.schedule(move_x(TweenTarget::Media(5), 100.0, 1.0, 0.0));
        scheduler.schedule(move_x(TweenTarget::Background, 100.0, 1.0, 0.0));
        scheduler.tick(1.0 / 60.0, &mut media, &mut bg);

        assert!(scheduler.is_idle());
        assert_eq!(media[0].rect.x, 0.0);
    }

    #[test]
    fn test_zero_duration_lands_immediately() {
        let mut media = vec![make_item(0.0, 0.0, 10.0, 10.0)];
        let mut bg = None;
        let mut scheduler = TweenScheduler::new();

        scheduler.schedule(move_x(TweenTarget::Media(0), 42.0, 0.0, 0.0));
        scheduler.tick(1.0 / 60.0, &mut media, &mut bg);

        assert_eq!(media[0].rect.x, 42.0);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_empty_request_schedules_nothing() {
        let mut scheduler = TweenScheduler::new();
        scheduler.schedule(TweenRequest {
            target: TweenTarget::Media(0),
            props: TweenProps::default(),
            duration: 1.0,
            delay: 0.0,
            easing: Easing::ExpoOut,
        });
        assert!(scheduler.is_idle());
    }
}
