use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::events::{FrameEvent, FrameEvents, Surface};
use crate::field::Playfield;

/// Resolve ball contacts with the field edges and both paddles.
///
/// Bounces are perfectly elastic: restitution 1.0, zero friction. A wall
/// flips `vy`, a paddle flips `vx`; magnitudes are preserved and no spin
/// is added. The ball is pushed back to the contact surface so a bounce
/// cannot re-trigger on the next tick. Every contact appends a `Hit`
/// event for the audio adapter.
pub fn resolve_collisions(world: &mut World, field: &Playfield, events: &mut FrameEvents) {
    let paddles: Vec<Paddle> = {
        let mut query = world.query::<&Paddle>();
        query.iter().map(|(_e, paddle)| *paddle).collect()
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Bottom and top edges. Only a ball moving into the edge bounces.
        if ball.pos.y - ball.radius <= field.min.y && ball.vel.y < 0.0 {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = field.min.y + ball.radius;
            events.push(FrameEvent::Hit(Surface::Wall));
        } else if ball.pos.y + ball.radius >= field.max.y && ball.vel.y > 0.0 {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = field.max.y - ball.radius;
            events.push(FrameEvent::Hit(Surface::Wall));
        }

        for paddle in &paddles {
            let dx = (ball.pos.x - paddle.x).abs();
            let dy = (ball.pos.y - paddle.y).abs();
            if dx >= paddle.half_width + ball.radius || dy >= paddle.half_height + ball.radius {
                continue;
            }

            let incoming = match paddle.side {
                Side::Left => ball.vel.x < 0.0,
                Side::Right => ball.vel.x > 0.0,
            };
            if !incoming {
                continue;
            }

            ball.vel.x = -ball.vel.x;
            let face = paddle.half_width + ball.radius;
            ball.pos.x = match paddle.side {
                Side::Left => paddle.x + face,
                Side::Right => paddle.x - face,
            };
            events.push(FrameEvent::Hit(Surface::Paddle(paddle.side)));
        }
    }
}
