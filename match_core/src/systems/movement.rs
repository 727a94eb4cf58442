use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::field::Playfield;

/// Ease both paddles toward their targets, clamped to the field.
///
/// The human paddle chases its last-set `target_y`; the AI paddle chases
/// the ball's current Y with a slower time constant, so it trails the ball
/// instead of mirroring it.
pub fn drive_paddles(world: &mut World, field: &Playfield, config: &Config, dt: f32) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let (target, time_constant) = match paddle.side {
            Side::Left => (paddle.target_y, config.player_track_time),
            Side::Right => match ball_y {
                Some(y) => (y, config.ai_track_time),
                None => continue,
            },
        };
        paddle.track(target, time_constant, dt);
        paddle.y = field.clamp_y(paddle.y, paddle.half_height);
    }
}

/// Move the ball by its velocity.
pub fn integrate_ball(world: &mut World, dt: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * dt;
    }
}

/// Re-apply the horizontal speed floor: the ball never drifts slower than
/// the floor along X. A dx of exactly zero restarts toward the right.
pub fn enforce_min_horizontal_speed(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.vel.x.abs() < config.min_horizontal_speed {
            ball.vel.x = if ball.vel.x < 0.0 {
                -config.min_horizontal_speed
            } else {
                config.min_horizontal_speed
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (World, Playfield, Config) {
        let config = Config::new();
        let field = Playfield::new(config.field_width, config.field_height);
        (World::new(), field, config)
    }

    fn spawn_paddle(world: &mut World, config: &Config, side: Side, y: f32) {
        world.spawn((Paddle::new(
            side,
            config.paddle_x(side),
            y,
            config.paddle_width / 2.0,
            config.paddle_height / 2.0,
        ),));
    }

    fn paddle_y(world: &World, side: Side) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .unwrap()
    }

    #[test]
    fn test_player_paddle_eases_toward_target() {
        let (mut world, field, config) = setup();
        spawn_paddle(&mut world, &config, Side::Left, 384.0);
        for (_e, p) in world.query_mut::<&mut Paddle>() {
            p.target_y = 600.0;
        }

        drive_paddles(&mut world, &field, &config, 0.016);
        let y = paddle_y(&world, Side::Left);
        assert!(y > 384.0 && y < 600.0, "one tick moves part way, got {}", y);
    }

    #[test]
    fn test_paddle_stays_clamped_at_extreme_target() {
        let (mut world, field, config) = setup();
        spawn_paddle(&mut world, &config, Side::Left, 384.0);
        for (_e, p) in world.query_mut::<&mut Paddle>() {
            p.target_y = 1e6;
        }

        for _ in 0..600 {
            drive_paddles(&mut world, &field, &config, 0.016);
        }
        let y = paddle_y(&world, Side::Left);
        assert_eq!(y, field.max.y - config.paddle_height / 2.0);
    }

    #[test]
    fn test_ai_paddle_tracks_ball_with_lag() {
        let (mut world, field, config) = setup();
        spawn_paddle(&mut world, &config, Side::Left, 384.0);
        spawn_paddle(&mut world, &config, Side::Right, 384.0);
        world.spawn((Ball {
            pos: Vec2::new(700.0, 600.0),
            vel: Vec2::ZERO,
            radius: config.ball_radius,
        },));

        drive_paddles(&mut world, &field, &config, 0.016);

        let ai_y = paddle_y(&world, Side::Right);
        assert!(ai_y > 384.0, "AI moves toward the ball");
        assert!(ai_y < 600.0, "AI does not snap to the ball");

        // Both paddles chase the same Y here, but the AI's slower time
        // constant leaves it further behind than the player would be.
        for (_e, p) in world.query_mut::<&mut Paddle>() {
            if p.side == Side::Left {
                p.target_y = 600.0;
            }
        }
        drive_paddles(&mut world, &field, &config, 0.016);
        let player_y = paddle_y(&world, Side::Left);
        let ai_y = paddle_y(&world, Side::Right);
        assert!(
            player_y > ai_y,
            "player paddle closes faster than the AI, {} vs {}",
            player_y,
            ai_y
        );
    }

    #[test]
    fn test_integrate_ball_applies_velocity() {
        let (mut world, _field, config) = setup();
        world.spawn((Ball {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(150.0, -50.0),
            radius: config.ball_radius,
        },));

        integrate_ball(&mut world, 0.1);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(115.0, 95.0));
        }
    }

    #[test]
    fn test_floor_bumps_slow_ball_preserving_sign() {
        let (mut world, _field, config) = setup();
        world.spawn((Ball {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(-40.0, 80.0),
            radius: config.ball_radius,
        },));

        enforce_min_horizontal_speed(&mut world, &config);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.x, -config.min_horizontal_speed);
            assert_eq!(ball.vel.y, 80.0, "only the horizontal component is floored");
        }
    }

    #[test]
    fn test_floor_treats_zero_as_positive() {
        let (mut world, _field, config) = setup();
        world.spawn((Ball {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(0.0, 80.0),
            radius: config.ball_radius,
        },));

        enforce_min_horizontal_speed(&mut world, &config);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.x, config.min_horizontal_speed);
        }
    }

    #[test]
    fn test_floor_leaves_fast_ball_alone() {
        let (mut world, _field, config) = setup();
        world.spawn((Ball {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(-300.0, 10.0),
            radius: config.ball_radius,
        },));

        enforce_min_horizontal_speed(&mut world, &config);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel, Vec2::new(-300.0, 10.0));
        }
    }
}
