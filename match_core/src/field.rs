use glam::Vec2;

/// The playfield rectangle. Immutable for the lifetime of a match: paddle
/// clamping, wall bounces and the scoring thresholds are all evaluated
/// against it.
#[derive(Debug, Clone, Copy)]
pub struct Playfield {
    pub min: Vec2,
    pub max: Vec2,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// The vertical line splitting the human half from the AI half.
    pub fn mid_x(&self) -> f32 {
        (self.min.x + self.max.x) * 0.5
    }

    /// Clamp a paddle center so the whole paddle body stays inside the field.
    pub fn clamp_y(&self, y: f32, half_height: f32) -> f32 {
        y.clamp(self.min.y + half_height, self.max.y - half_height)
    }
}
