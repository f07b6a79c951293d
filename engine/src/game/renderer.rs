use super::session::SessionPhase;
use super::state::GameState;

/// Read-only snapshot handed to the renderer after every accepted tick and
/// every paused frame.
pub struct FrameView<'a> {
    pub state: &'a GameState,
    pub phase: SessionPhase,
    pub now_ms: u64,
}

pub trait Renderer {
    fn render(&mut self, view: &FrameView<'_>);
}
