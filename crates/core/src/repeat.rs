//! Horizontal auto-repeat for a held direction.
//!
//! Two-phase schedule driven by caller timestamps:
//! one move on the press, the first repeat `initial_delay` later, then one
//! repeat every `interval` while the direction stays held. Releasing or
//! switching direction restarts the schedule.

use arrayvec::ArrayVec;

use crate::types::Timestamp;

/// Most moves emitted by a single update; a longer stall drops the backlog.
const MAX_STEPS_PER_UPDATE: usize = 32;

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
}

impl HorizontalDirection {
    /// Column delta for one step
    pub fn dx(self) -> i32 {
        match self {
            HorizontalDirection::Left => -1,
            HorizontalDirection::Right => 1,
        }
    }

    /// Resolve held keys into a direction. Both held cancel out.
    pub fn from_held(left: bool, right: bool) -> Option<Self> {
        match (left, right) {
            (true, false) => Some(HorizontalDirection::Left),
            (false, true) => Some(HorizontalDirection::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RepeatTimer {
    held: Option<HorizontalDirection>,
    next_due: Timestamp,
    initial_delay: u64,
    interval: u64,
}

impl RepeatTimer {
    pub fn new(initial_delay: u64, interval: u64) -> Self {
        Self {
            held: None,
            next_due: 0,
            initial_delay,
            interval: interval.max(1),
        }
    }

    /// Currently held direction, if any
    pub fn held(&self) -> Option<HorizontalDirection> {
        self.held
    }

    /// Feed this tick's held direction and collect the moves that are due.
    pub fn update(
        &mut self,
        now: Timestamp,
        direction: Option<HorizontalDirection>,
    ) -> ArrayVec<HorizontalDirection, MAX_STEPS_PER_UPDATE> {
        let mut steps = ArrayVec::new();

        if direction != self.held {
            self.held = direction;
            if let Some(dir) = direction {
                self.next_due = now.saturating_add(self.initial_delay);
                steps.push(dir);
            }
            return steps;
        }

        let Some(dir) = self.held else {
            return steps;
        };

        while now >= self.next_due {
            if steps.try_push(dir).is_err() {
                self.next_due = now + self.interval;
                break;
            }
            self.next_due += self.interval;
        }

        steps
    }

    /// Forget the held direction
    pub fn reset(&mut self) {
        self.held = None;
        self.next_due = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use HorizontalDirection::{Left, Right};

    #[test]
    fn test_press_moves_immediately() {
        let mut timer = RepeatTimer::new(100, 30);
        assert_eq!(timer.update(0, Some(Left)).as_slice(), &[Left]);
    }

    #[test]
    fn test_initial_delay_then_interval() {
        let mut timer = RepeatTimer::new(100, 30);
        timer.update(0, Some(Left));

        for t in 1..100 {
            assert!(timer.update(t, Some(Left)).is_empty(), "early repeat at {}", t);
        }
        assert_eq!(timer.update(100, Some(Left)).as_slice(), &[Left]);
        assert!(timer.update(129, Some(Left)).is_empty());
        assert_eq!(timer.update(130, Some(Left)).as_slice(), &[Left]);
        assert_eq!(timer.update(160, Some(Left)).as_slice(), &[Left]);
    }

    #[test]
    fn test_long_tick_catches_up() {
        let mut timer = RepeatTimer::new(100, 30);
        timer.update(0, Some(Right));
        // Due at 100, 130, 160.
        assert_eq!(timer.update(170, Some(Right)).len(), 3);
    }

    #[test]
    fn test_release_restarts_schedule() {
        let mut timer = RepeatTimer::new(100, 30);
        timer.update(0, Some(Left));
        timer.update(100, Some(Left));
        assert!(timer.update(110, None).is_empty());
        assert_eq!(timer.update(120, Some(Left)).as_slice(), &[Left]);
        assert!(timer.update(219, Some(Left)).is_empty());
        assert_eq!(timer.update(220, Some(Left)).as_slice(), &[Left]);
    }

    #[test]
    fn test_direction_switch_counts_as_press() {
        let mut timer = RepeatTimer::new(100, 30);
        timer.update(0, Some(Left));
        assert_eq!(timer.update(50, Some(Right)).as_slice(), &[Right]);
        assert!(timer.update(100, Some(Right)).is_empty());
        assert_eq!(timer.update(150, Some(Right)).as_slice(), &[Right]);
    }

    #[test]
    fn test_both_held_cancel() {
        assert_eq!(HorizontalDirection::from_held(true, true), None);
        assert_eq!(HorizontalDirection::from_held(true, false), Some(Left));
        assert_eq!(HorizontalDirection::from_held(false, true), Some(Right));
    }

    #[test]
    fn test_backlog_is_bounded() {
        let mut timer = RepeatTimer::new(0, 1);
        timer.update(0, Some(Left));
        let steps = timer.update(10_000, Some(Left));
        assert_eq!(steps.len(), MAX_STEPS_PER_UPDATE);
        assert!(timer.update(10_000, Some(Left)).is_empty());
    }
}
