/// Tuning parameters for the match simulation
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const FIELD_WIDTH: f32 = 1024.0;
    pub const FIELD_HEIGHT: f32 = 768.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 48.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_INSET: f32 = 48.0; // X distance from the owning edge
    pub const PLAYER_TRACK_TIME: f32 = 0.1; // seconds, approach time constant
    pub const AI_TRACK_TIME: f32 = 0.4; // slower on purpose, the AI lags the ball

    // Ball
    pub const BALL_RADIUS: f32 = 14.0;
    pub const MIN_HORIZONTAL_SPEED: f32 = 150.0; // floor, re-applied every tick
    pub const SERVE_SPEED_X: f32 = 120.0;
    pub const SERVE_MAX_SPREAD: f32 = 100.0; // |vy| bound on a fresh serve

    // Physics stepping
    pub const FIXED_DT: f32 = 0.0166; // ~60 Hz micro-steps
    pub const MAX_DT: f32 = 0.1; // clamp to prevent large jumps
}
