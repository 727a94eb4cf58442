use crate::components::Side;

/// What the ball struck during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Top or bottom field edge.
    Wall,
    /// One of the two paddles.
    Paddle(Side),
}

/// A single observable occurrence inside `advance`. The simulator performs
/// no I/O; adapters turn these into sound cues and score displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// Ball contact with a wall or paddle.
    Hit(Surface),
    /// A side scored; the ball has already been re-served.
    Score { winner: Side },
}

/// Ordered list of everything that happened during one `advance` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameEvents {
    events: Vec<FrameEvent>,
}

impl FrameEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: FrameEvent) {
        self.events.push(event);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrameEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Winner of the first score event this frame, if any.
    pub fn scored(&self) -> Option<Side> {
        self.events.iter().find_map(|event| match event {
            FrameEvent::Score { winner } => Some(*winner),
            _ => None,
        })
    }

    /// Number of ball contacts this frame.
    pub fn hit_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, FrameEvent::Hit(_)))
            .count()
    }
}

impl<'a> IntoIterator for &'a FrameEvents {
    type Item = &'a FrameEvent;
    type IntoIter = std::slice::Iter<'a, FrameEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl IntoIterator for FrameEvents {
    type Item = FrameEvent;
    type IntoIter = std::vec::IntoIter<FrameEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
