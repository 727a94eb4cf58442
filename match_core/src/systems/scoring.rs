use hecs::World;
use log::debug;

use crate::components::{Ball, Side};
use crate::config::Config;
use crate::events::{FrameEvent, FrameEvents};
use crate::field::Playfield;
use crate::resources::{GameRng, Score};

/// Detect an out-of-bounds ball, award the point and re-serve.
///
/// The ball's leading edge crossing a side threshold scores for the
/// opposite side. The ball is recentered and re-launched in place, it is
/// never despawned.
pub fn settle_scores(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    score: &mut Score,
    events: &mut FrameEvents,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let winner = if ball.pos.x - ball.radius <= field.min.x {
            Some(Side::Right)
        } else if ball.pos.x + ball.radius >= field.max.x {
            Some(Side::Left)
        } else {
            None
        };

        let Some(winner) = winner else { continue };

        match winner {
            Side::Left => score.increment_left(),
            Side::Right => score.increment_right(),
        }
        events.push(FrameEvent::Score { winner });
        ball.serve(
            field.center(),
            config.serve_speed_x,
            config.serve_max_spread,
            rng,
        );
        debug!(
            "{:?} side scores, {} - {}, re-serving",
            winner, score.left, score.right
        );
    }
}
