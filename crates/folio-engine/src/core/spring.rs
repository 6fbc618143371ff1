// core/spring.rs
//
// Damped harmonic oscillator, integrated in closed form.
// No dependencies on the navigator or parallax engine — just math.
//
//   m·x'' + c·x' + k·x = 0,  x = value - target
//
// The analytic solution is exact for any dt, so a frame that arrives late
// samples the same trajectory as several short frames would.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Physical constants of a spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringParams {
    /// Restoring force per unit of displacement (default: 200).
    pub stiffness: f32,
    /// Opposing force per unit of velocity (default: 30).
    pub damping: f32,
    /// Mass of the moving value (default: 1).
    pub mass: f32,
    /// Displacement below which the spring may come to rest (default: 0.005).
    pub rest_delta: f32,
    /// Speed below which the spring may come to rest (default: 0.01).
    pub rest_speed: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 200.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.005,
            rest_speed: 0.01,
        }
    }
}

impl SpringParams {
    /// Undamped angular frequency ω₀ = √(k/m).
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness.max(0.0) / self.mass.max(f32::EPSILON)).sqrt()
    }

    /// Damping ratio ζ = c / (2·√(k·m)). 1.0 is critical damping.
    pub fn damping_ratio(&self) -> f32 {
        let denom = 2.0 * (self.stiffness.max(0.0) * self.mass.max(f32::EPSILON)).sqrt();
        if denom > 0.0 {
            self.damping.max(0.0) / denom
        } else {
            f32::INFINITY
        }
    }
}

/// Position and velocity of a single spring-driven value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringState {
    pub value: f32,
    pub velocity: f32,
}

impl SpringState {
    /// A spring resting at `value`.
    pub fn at(value: f32) -> Self {
        Self { value, velocity: 0.0 }
    }

    /// Whether this state is exactly at rest on `target`.
    pub fn is_at_rest(&self, target: f32) -> bool {
        self.value == target && self.velocity == 0.0
    }
}

/// Treat ratios this close to 1.0 as critically damped.
const CRITICAL_EPSILON: f32 = 1e-3;

/// Advance `state` toward `target` by `dt` seconds.
///
/// Non-positive or non-finite `dt` (and a non-finite target) leave the state
/// untouched. Once displacement and speed both drop under the rest thresholds
/// the state snaps onto the target with zero velocity.
pub fn spring_step(state: SpringState, target: f32, dt: f32, params: &SpringParams) -> SpringState {
    if !(dt > 0.0) || !dt.is_finite() || !target.is_finite() {
        return state;
    }
    if params.stiffness <= 0.0 {
        return SpringState::at(target);
    }

    let omega = params.natural_frequency();
    let zeta = params.damping_ratio();
    let x0 = state.value - target;
    let v0 = state.velocity;

    let (x, v) = if (zeta - 1.0).abs() < CRITICAL_EPSILON {
        // x(t) = (c1 + c2·t)·e^(-ω·t)
        let e = (-omega * dt).exp();
        let c2 = v0 + omega * x0;
        let x = (x0 + c2 * dt) * e;
        let v = (c2 - omega * (x0 + c2 * dt)) * e;
        (x, v)
    } else if zeta > 1.0 {
        // x(t) = A·e^(r1·t) + B·e^(r2·t), two real roots
        let s = omega * (zeta * zeta - 1.0).sqrt();
        let r1 = -zeta * omega + s;
        let r2 = -zeta * omega - s;
        let a = (v0 - r2 * x0) / (r1 - r2);
        let b = x0 - a;
        let e1 = (r1 * dt).exp();
        let e2 = (r2 * dt).exp();
        (a * e1 + b * e2, r1 * a * e1 + r2 * b * e2)
    } else {
        // x(t) = e^(-α·t)·(x0·cos(ωd·t) + B·sin(ωd·t))
        let alpha = zeta * omega;
        let wd = omega * (1.0 - zeta * zeta).sqrt();
        let e = (-alpha * dt).exp();
        let (sin, cos) = (wd * dt).sin_cos();
        let b = (v0 + alpha * x0) / wd;
        let x = e * (x0 * cos + b * sin);
        let v = -alpha * x + e * wd * (b * cos - x0 * sin);
        (x, v)
    };

    if x.abs() < params.rest_delta && v.abs() < params.rest_speed {
        SpringState::at(target)
    } else {
        SpringState { value: target + x, velocity: v }
    }
}

/// Two independent springs sharing one set of constants.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spring2 {
    pub x: SpringState,
    pub y: SpringState,
}

impl Spring2 {
    pub fn at(value: Vec2) -> Self {
        Self {
            x: SpringState::at(value.x),
            y: SpringState::at(value.y),
        }
    }

    pub fn step(&mut self, target: Vec2, dt: f32, params: &SpringParams) {
        self.x = spring_step(self.x, target.x, dt, params);
        self.y = spring_step(self.y, target.y, dt, params);
    }

    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value, self.y.value)
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.x.velocity, self.y.velocity)
    }

    pub fn is_at_rest(&self, target: Vec2) -> bool {
        self.x.is_at_rest(target.x) && self.y.is_at_rest(target.y)
    }
}
