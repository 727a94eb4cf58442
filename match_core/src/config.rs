use crate::components::Side;
use crate::params::Params;

/// Runtime copy of the tuning parameters. Built once per match; the
/// simulator owns it and nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub player_track_time: f32,
    pub ai_track_time: f32,
    pub ball_radius: f32,
    pub min_horizontal_speed: f32,
    pub serve_speed_x: f32,
    pub serve_max_spread: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            player_track_time: Params::PLAYER_TRACK_TIME,
            ai_track_time: Params::AI_TRACK_TIME,
            ball_radius: Params::BALL_RADIUS,
            min_horizontal_speed: Params::MIN_HORIZONTAL_SPEED,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_max_spread: Params::SERVE_MAX_SPREAD,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed X position for a paddle. Paddles never move horizontally.
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.field_width - self.paddle_inset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_x_positions() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), Params::PADDLE_INSET);
        assert_eq!(
            config.paddle_x(Side::Right),
            Params::FIELD_WIDTH - Params::PADDLE_INSET
        );
    }

    #[test]
    fn test_defaults_are_consistent() {
        let config = Config::new();
        assert!(config.serve_speed_x < config.min_horizontal_speed,
            "serve drive sits below the floor; the first tick after a serve snaps it up");
        assert!(config.player_track_time < config.ai_track_time,
            "the AI paddle must lag harder than the player paddle");
    }
}
