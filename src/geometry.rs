// Pure numeric helpers shared by the layout engine and the UI shell.

use std::time::{Duration, Instant};

/// Closed-interval containment test: `min <= value <= max`.
pub fn in_range(value: f32, min: f32, max: f32) -> bool {
    value >= min && value <= max
}

/// Saturate `n` into `[min, max]`. The lower bound wins first, so an
/// inverted interval resolves toward `min`.
pub fn clamp(n: f32, min: f32, max: f32) -> f32 {
    if n < min {
        min
    } else if n > max {
        max
    } else {
        n
    }
}

/// An axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point lies inside this rectangle (edges inclusive).
    pub fn contains(&self, px: f32, py: f32) -> bool {
        in_range(px, self.x, self.x + self.width) && in_range(py, self.y, self.y + self.height)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Collapses a burst of events into a single delivery after a quiet period.
///
/// `trigger` arms (or re-arms) the quiet period; `fire` reports `true`
/// exactly once, the first time it is polled after the period has elapsed
/// with no further triggers.
#[derive(Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            deadline: None,
        }
    }

    /// Note an event; any pending delivery is pushed back.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet_period);
    }

    /// Poll for a due delivery. Consumes the pending state when it fires.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_edges_inclusive() {
        assert!(in_range(0.0, 0.0, 10.0));
        assert!(in_range(10.0, 0.0, 10.0));
        assert!(in_range(5.0, 0.0, 10.0));
        assert!(!in_range(-0.001, 0.0, 10.0));
        assert!(!in_range(10.001, 0.0, 10.0));
    }

    #[test]
    fn test_clamp_saturates() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
        // Inverted interval: the lower bound check runs first.
        assert_eq!(clamp(5.0, 8.0, 2.0), 8.0);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(40.0, 60.0));
        assert!(rect.contains(25.0, 35.0));
        assert!(!rect.contains(9.9, 35.0));
        assert!(!rect.contains(25.0, 60.1));
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.center(), (25.0, 40.0));
    }

    #[test]
    fn test_debouncer_collapses_bursts() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(150));

        debouncer.trigger(start);
        debouncer.trigger(start + Duration::from_millis(50));
        debouncer.trigger(start + Duration::from_millis(100));

        // Quiet period counts from the last trigger.
        assert!(!debouncer.fire(start + Duration::from_millis(200)));
        assert!(debouncer.fire(start + Duration::from_millis(250)));

        // Fires once, then disarms.
        assert!(!debouncer.fire(start + Duration::from_millis(300)));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_debouncer_idle_never_fires() {
        let mut debouncer = Debouncer::new(Duration::from_millis(150));
        assert!(!debouncer.fire(Instant::now()));
    }
}
