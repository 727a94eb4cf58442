use glam::Vec2;
use rand::Rng;

use crate::resources::GameRng;

/// Which end of the field a paddle defends. Left is the human player,
/// right is the AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component. `x` is fixed for the paddle's lifetime; only `y`
/// changes, easing toward `target_y` each tick.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub target_y: f32,
    pub half_width: f32,
    pub half_height: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, half_width: f32, half_height: f32) -> Self {
        Self {
            side,
            x,
            y,
            target_y: y,
            half_width,
            half_height,
        }
    }

    /// Ease toward `target` with the given time constant. Exponential
    /// approach: composes across sub-steps, never overshoots, and the
    /// per-tick velocity stays bounded by the remaining distance.
    pub fn track(&mut self, target: f32, time_constant: f32, dt: f32) {
        let blend = 1.0 - (-dt / time_constant).exp();
        self.y += (target - self.y) * blend;
    }
}

/// Ball component. Created once per match; a score repositions and
/// re-launches it rather than respawning.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Serve: recenter and launch with a fresh random impulse. Horizontal
    /// drive is a coin flip between the two signs, vertical spread is
    /// uniform in `[-max_spread, max_spread]`.
    pub fn serve(&mut self, center: Vec2, speed_x: f32, max_spread: f32, rng: &mut GameRng) {
        self.pos = center;
        let vx = if rng.0.gen_bool(0.5) { speed_x } else { -speed_x };
        let vy = rng.0.gen_range(-max_spread..=max_spread);
        self.vel = Vec2::new(vx, vy);
    }
}
