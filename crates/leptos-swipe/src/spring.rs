//! Spring Animation
//!
//! Damped spring integrator used to settle a row on its rest offset.

use serde::{Deserialize, Serialize};

/// Integration step in seconds
const SUB_STEP: f64 = 0.001;

/// Spring parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from target below which the spring may stop
    pub rest_displacement: f64,
    /// Speed below which the spring may stop
    pub rest_speed: f64,
    /// Never move past the target
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 230.0,
            damping: 22.0,
            mass: 1.0,
            rest_displacement: 0.05,
            rest_speed: 0.05,
            overshoot_clamping: true,
        }
    }
}

/// A running spring from one offset toward a target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
    /// Sign of (target - start), used for overshoot clamping
    direction: f64,
    done: bool,
}

impl Spring {
    pub fn new(from: f64, target: f64, config: SpringConfig) -> Self {
        let mut spring = Self {
            config,
            position: from,
            velocity: 0.0,
            target,
            direction: (target - from).signum(),
            done: false,
        };
        spring.done = spring.at_rest();
        if spring.done {
            spring.position = target;
        }
        spring
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    fn at_rest(&self) -> bool {
        (self.target - self.position).abs() <= self.config.rest_displacement
            && self.velocity.abs() <= self.config.rest_speed
    }

    fn overshot(&self) -> bool {
        self.direction != 0.0 && (self.position - self.target) * self.direction > 0.0
    }

    /// Advance by `dt` seconds. Returns the new position.
    ///
    /// Once at rest the position is exactly the target.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.done {
            return self.position;
        }

        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(SUB_STEP);
            let displacement = self.position - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.position += self.velocity * h;
            remaining -= h;

            if self.config.overshoot_clamping && self.overshot() {
                self.position = self.target;
                self.velocity = 0.0;
            }
            if self.at_rest() {
                self.position = self.target;
                self.velocity = 0.0;
                self.done = true;
                break;
            }
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, frames: usize) -> Vec<f64> {
        (0..frames).map(|_| spring.step(1.0 / 60.0)).collect()
    }

    #[test]
    fn test_converges_exactly_on_target() {
        let mut spring = Spring::new(-150.0, -80.0, SpringConfig::default());
        run(&mut spring, 300);
        assert!(spring.is_done());
        assert_eq!(spring.position(), -80.0);
    }

    #[test]
    fn test_clamped_spring_never_overshoots() {
        let mut spring = Spring::new(-80.0, 0.0, SpringConfig::default());
        for p in run(&mut spring, 300) {
            assert!(p <= 0.0 && p >= -80.0, "position {}", p);
        }
        assert_eq!(spring.position(), 0.0);
    }

    #[test]
    fn test_unclamped_spring_overshoots_then_settles() {
        let config = SpringConfig { overshoot_clamping: false, damping: 8.0, ..SpringConfig::default() };
        let mut spring = Spring::new(-80.0, 0.0, config);
        let positions = run(&mut spring, 600);
        assert!(positions.iter().any(|p| *p > 0.0));
        assert!(spring.is_done());
        assert_eq!(spring.position(), 0.0);
    }

    #[test]
    fn test_spring_at_target_is_done_immediately() {
        let spring = Spring::new(0.0, 0.0, SpringConfig::default());
        assert!(spring.is_done());
    }

    #[test]
    fn test_moves_toward_target_each_frame() {
        let mut spring = Spring::new(0.0, -80.0, SpringConfig::default());
        let first = spring.step(1.0 / 60.0);
        assert!(first < 0.0);
        assert!(first > -80.0);
    }
}
