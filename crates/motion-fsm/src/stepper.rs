//! Pure step interpolation
//!
//! The stepping logic is a plain iterator so the same code drives a
//! busy-wait firmware loop today and a cooperative scheduler tick if one
//! is introduced later. Speed control is the delay between steps, not
//! the step size; the step is always one degree.

use crate::joint::{ANGLE_MAX, ANGLE_MIN};

/// Clamp a requested angle into the servo range.
pub fn clamp_angle(angle: i32) -> u8 {
    angle.clamp(i32::from(ANGLE_MIN), i32::from(ANGLE_MAX)) as u8
}

/// Yields each intermediate angle from just past `current` through
/// `target`, one degree at a time. Empty when already at target, which
/// is what makes repeated homing a safe no-op.
#[derive(Clone, Copy, Debug)]
pub struct StepPlan {
    current: u8,
    target: u8,
}

impl StepPlan {
    pub fn new(current: u8, target: u8) -> Self {
        Self { current, target }
    }

    pub fn remaining(&self) -> u8 {
        self.current.abs_diff(self.target)
    }
}

impl Iterator for StepPlan {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.current == self.target {
            return None;
        }
        self.current = if self.current < self.target {
            self.current + 1
        } else {
            self.current - 1
        };
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_up_one_degree_at_a_time() {
        let angles: Vec<u8> = StepPlan::new(90, 93).collect();
        assert_eq!(angles, vec![91, 92, 93]);
    }

    #[test]
    fn steps_down() {
        let angles: Vec<u8> = StepPlan::new(5, 2).collect();
        assert_eq!(angles, vec![4, 3, 2]);
    }

    #[test]
    fn zero_length_plan_is_empty() {
        assert_eq!(StepPlan::new(42, 42).count(), 0);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_angle(-20), 0);
        assert_eq!(clamp_angle(0), 0);
        assert_eq!(clamp_angle(180), 180);
        assert_eq!(clamp_angle(500), 180);
    }
}
