// src/animation/spring.rs
//
// Damped spring for a single scalar, integrated in fixed 1ms steps.
// Tension and friction use the same scale as the usual web spring presets
// (170 / 26 is a gentle, near-critically damped motion at mass 1).

use crate::store::SpringProps;

const STEP_MS: f32 = 1.0;
const TENSION_SCALE: f32 = 0.000_001;
const FRICTION_SCALE: f32 = 0.001;
const MIN_MASS: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub position: f32,
    /// units per millisecond
    pub velocity: f32,
    pub target: f32,
    at_rest: bool,
}

impl Spring {
    pub fn new(initial: f32) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target: initial,
            at_rest: true,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Redirects the spring. A new target restarts the motion from where the
    /// spring currently is, picking up `initial_velocity` when it is non-zero.
    pub fn set_target(&mut self, target: f32, initial_velocity: f32) {
        if target == self.target {
            return;
        }
        self.target = target;
        if initial_velocity != 0.0 {
            self.velocity = initial_velocity;
        }
        self.at_rest = false;
    }

    /// Restarts the motion towards the current target, e.g. after the spring
    /// physics changed. A spring already on target settles on its next step.
    pub fn restart(&mut self, initial_velocity: f32) {
        if initial_velocity != 0.0 {
            self.velocity = initial_velocity;
        }
        self.at_rest = false;
    }

    pub fn snap(&mut self, value: f32) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// Advances by `dt` seconds. Returns true while the spring is still moving.
    pub fn update(&mut self, dt: f32, config: &SpringProps) -> bool {
        if self.at_rest || dt <= 0.0 {
            return !self.at_rest;
        }

        let mass = config.mass.max(MIN_MASS);
        let rest_velocity = config.precision / 10.0;
        let steps = (dt * 1000.0 / STEP_MS).ceil() as u32;

        for _ in 0..steps {
            let spring_force = -config.tension * TENSION_SCALE * (self.position - self.target);
            let damping_force = -config.friction * FRICTION_SCALE * self.velocity;
            let acceleration = (spring_force + damping_force) / mass;

            self.velocity += acceleration * STEP_MS;
            self.position += self.velocity * STEP_MS;

            if !self.position.is_finite() || !self.velocity.is_finite() {
                self.snap(self.target);
                return false;
            }

            let displacement = (self.target - self.position).abs();
            if displacement <= config.precision && self.velocity.abs() <= rest_velocity {
                self.snap(self.target);
                return false;
            }
        }
        true
    }
}
