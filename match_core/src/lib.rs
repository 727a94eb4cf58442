//! Deterministic two-paddle match simulation.
//!
//! Everything with gameplay meaning lives in this crate: paddle easing, ball
//! integration, the horizontal speed floor, collision response, scoring and
//! serve resets. The simulator performs no I/O and is the sole owner of all
//! match state. Adapters interact through three narrow seams:
//!
//! - input adapter: [`MatchSimulator::set_player_target`]
//! - time adapter: [`MatchSimulator::advance`], once per display tick
//! - render/audio adapters: [`MatchSimulator::snapshot`] and the
//!   [`FrameEvents`] returned from `advance`
//!
//! Given the same seed and the same input script, two simulators produce
//! identical state, tick for tick.

pub mod components;
pub mod config;
pub mod events;
pub mod field;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::{Ball, Paddle, Side};
pub use config::Config;
pub use events::{FrameEvent, FrameEvents, Surface};
pub use field::Playfield;
pub use params::Params;
pub use resources::{GameRng, Score};

use glam::Vec2;
use hecs::World;
use log::warn;
use systems::*;

/// Read-only view of the match for the render adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSnapshot {
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub score: Score,
}

/// The match: two paddles, one ball, a score, and the field they live in.
///
/// Single-threaded by contract; exactly one logical owner calls
/// [`set_player_target`](Self::set_player_target) and
/// [`advance`](Self::advance), never concurrently.
pub struct MatchSimulator {
    world: World,
    field: Playfield,
    config: Config,
    score: Score,
    rng: GameRng,
    elapsed: f32,
}

impl MatchSimulator {
    /// Start a match with default tuning. Spawns both paddles centered,
    /// spawns the ball and applies the opening serve.
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        let field = Playfield::new(config.field_width, config.field_height);
        let mut rng = GameRng::new(seed);
        let mut world = World::new();

        let mid_y = field.center().y;
        let half_width = config.paddle_width / 2.0;
        let half_height = config.paddle_height / 2.0;
        for side in [Side::Left, Side::Right] {
            world.spawn((Paddle::new(
                side,
                config.paddle_x(side),
                mid_y,
                half_width,
                half_height,
            ),));
        }

        let mut ball = Ball::new(field.center(), config.ball_radius);
        ball.serve(
            field.center(),
            config.serve_speed_x,
            config.serve_max_spread,
            &mut rng,
        );
        world.spawn((ball,));

        Self {
            world,
            field,
            config,
            score: Score::new(),
            rng,
            elapsed: 0.0,
        }
    }

    /// Feed a pointer/touch position (playfield coordinates) to the human
    /// paddle. Touches on the AI half and non-finite coordinates are
    /// ignored; the paddle eases toward the new target over the following
    /// ticks rather than snapping to it.
    pub fn set_player_target(&mut self, touch: Vec2) {
        apply_player_target(&mut self.world, &self.field, touch);
    }

    /// Advance the match by `dt` seconds and report what happened.
    ///
    /// `dt` must be finite and non-negative; anything else is rejected
    /// without touching state. Large frames are clamped and split into
    /// fixed micro-steps, so physics behaves the same at any refresh rate.
    pub fn advance(&mut self, dt: f32) -> FrameEvents {
        if !dt.is_finite() || dt < 0.0 {
            warn!("rejecting invalid frame dt {}", dt);
            return FrameEvents::new();
        }

        let mut events = FrameEvents::new();
        let clamped_dt = dt.min(Params::MAX_DT);
        let mut remaining = clamped_dt;
        while remaining > 0.0 {
            let step_dt = remaining.min(Params::FIXED_DT);
            remaining -= step_dt;
            step(
                &mut self.world,
                &self.field,
                &self.config,
                &mut self.score,
                &mut events,
                &mut self.rng,
                step_dt,
            );
        }
        self.elapsed += clamped_dt;
        events
    }

    /// Pure read of the current state. Safe to call any number of times
    /// between `advance` calls.
    pub fn snapshot(&self) -> MatchSnapshot {
        let mid_y = self.field.center().y;
        let mut snapshot = MatchSnapshot {
            left_paddle_y: mid_y,
            right_paddle_y: mid_y,
            ball_pos: self.field.center(),
            ball_vel: Vec2::ZERO,
            score: self.score,
        };

        for (_entity, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => snapshot.left_paddle_y = paddle.y,
                Side::Right => snapshot.right_paddle_y = paddle.y,
            }
        }
        for (_entity, ball) in self.world.query::<&Ball>().iter() {
            snapshot.ball_pos = ball.pos;
            snapshot.ball_vel = ball.vel;
        }
        snapshot
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn playfield(&self) -> &Playfield {
        &self.field
    }

    /// Total simulated time in seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// One fixed micro-step of the simulation, in the canonical order:
/// paddle motion, ball integration, speed floor, collisions, scoring.
pub fn step(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    score: &mut Score,
    events: &mut FrameEvents,
    rng: &mut GameRng,
    dt: f32,
) {
    drive_paddles(world, field, config, dt);
    integrate_ball(world, dt);
    enforce_min_horizontal_speed(world, config);
    resolve_collisions(world, field, events);
    settle_scores(world, field, config, score, events, rng);
}
