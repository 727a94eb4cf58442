use glam::Vec2;
use hecs::World;
use log::warn;

use crate::components::{Paddle, Side};
use crate::field::Playfield;

/// Apply a pointer/touch position to the human paddle's target.
///
/// The touch is in playfield coordinates. Touches on the AI half
/// (`x > mid_x`) are ignored: human input never steers the right paddle.
/// Non-finite coordinates are rejected outright so a bad adapter cannot
/// poison the simulation.
pub fn apply_player_target(world: &mut World, field: &Playfield, touch: Vec2) {
    if !touch.x.is_finite() || !touch.y.is_finite() {
        warn!("ignoring non-finite player target ({}, {})", touch.x, touch.y);
        return;
    }
    if touch.x > field.mid_x() {
        return;
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Left {
            paddle.target_y = touch.y;
        }
    }
}
