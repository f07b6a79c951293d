use std::io::Write;

use snake_engine::game::{
    Competitor, FrameView, GameEvent, PlayerVisibility, Point, PowerUpKind, Renderer, SessionPhase,
};
use snake_engine::log;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const BELL: &str = "\x07";

fn power_up_glyph(kind: PowerUpKind) -> char {
    match kind {
        PowerUpKind::DoubleScore => 'D',
        PowerUpKind::SlowMotion => 'S',
        PowerUpKind::Invisible => 'I',
        PowerUpKind::MegaFood => 'M',
        PowerUpKind::Shrink => 'R',
        PowerUpKind::Shield => 'H',
    }
}

/// Draws the board as text. Identical consecutive frames are written once.
pub struct TerminalRenderer<W: Write> {
    out: W,
    last_frame: String,
    message: Option<String>,
    sound_enabled: bool,
    pending_bell: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, sound_enabled: bool) -> Self {
        Self {
            out,
            last_frame: String::new(),
            message: None,
            sound_enabled,
            pending_bell: false,
        }
    }

    /// Turns a game event into the status message, plus a bell for pickups
    /// when sound is on.
    pub fn announce(&mut self, event: &GameEvent) {
        let message = match event {
            GameEvent::FoodEaten { by: Competitor::Player, points } => {
                self.pending_bell = self.sound_enabled;
                format!("+{} points", points)
            }
            GameEvent::FoodEaten { by: Competitor::Ai, .. } => "The AI got the food".to_string(),
            GameEvent::PowerUpSpawned(spawned) => format!("{} appeared", spawned.kind.name()),
            GameEvent::PowerUpApplied(kind) => {
                self.pending_bell = self.sound_enabled;
                format!("{}!", kind.name())
            }
            GameEvent::PowerUpTakenByAi(kind) => format!("The AI took {}", kind.name()),
            GameEvent::PowerUpDespawned(kind) => format!("{} vanished", kind.name()),
            GameEvent::EffectExpired(kind) => format!("{} wore off", kind.name()),
            GameEvent::ShieldBroken => "Shield broken!".to_string(),
            GameEvent::AiReset { reason, final_score } => {
                format!("The AI {} (scored {})", reason.describe(), final_score)
            }
            GameEvent::SessionStarted { .. } | GameEvent::SessionOver { .. } => return,
        };
        self.message = Some(message);
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, view: &FrameView<'_>) {
        let frame = draw_frame(view, self.message.as_deref());
        if frame == self.last_frame && !self.pending_bell {
            return;
        }

        let bell = if std::mem::take(&mut self.pending_bell) { BELL } else { "" };
        let written = write!(self.out, "{}{}{}", CLEAR_SCREEN, bell, frame).and_then(|_| self.out.flush());
        if let Err(e) = written {
            log!("Failed to draw frame: {}", e);
        }
        self.last_frame = frame;
    }
}

pub fn draw_frame(view: &FrameView<'_>, message: Option<&str>) -> String {
    let state = view.state;
    let size = state.grid.tile_count();
    let mut cells = vec![vec!['.'; size as usize]; size as usize];
    let mut put = |p: Point, glyph: char| {
        if state.grid.in_bounds(p) {
            cells[p.y as usize][p.x as usize] = glyph;
        }
    };

    put(state.food, '*');
    if let Some(spawned) = state.power_ups.spawned() {
        put(spawned.position, power_up_glyph(spawned.kind));
    }
    if let Some(ai) = &state.ai {
        for segment in ai.snake.segments().skip(1) {
            put(segment, 'a');
        }
        put(ai.snake.head(), 'A');
    }
    match state.player_visibility(view.now_ms) {
        PlayerVisibility::Full => {
            for segment in state.player.segments().skip(1) {
                put(segment, 'o');
            }
            put(state.player.head(), '@');
        }
        PlayerVisibility::HeadOnly => put(state.player.head(), '@'),
        PlayerVisibility::Hidden => {}
    }

    let border = "#".repeat(size as usize + 2);
    let mut frame = String::new();
    frame.push_str(&border);
    frame.push('\n');
    for row in cells {
        frame.push('#');
        frame.extend(row);
        frame.push_str("#\n");
    }
    frame.push_str(&border);
    frame.push('\n');

    frame.push_str(&format!("Score: {}", state.player_score));
    if let Some(ai_score) = state.ai_score() {
        frame.push_str(&format!("   AI: {}", ai_score));
    }
    match view.phase {
        SessionPhase::Paused => frame.push_str("   [PAUSED]"),
        SessionPhase::Over => frame.push_str("   [GAME OVER]"),
        SessionPhase::Idle | SessionPhase::Running => {}
    }
    frame.push('\n');

    let effects: Vec<String> = state
        .power_ups
        .active_effects()
        .iter()
        .filter(|effect| effect.expires_at_ms > view.now_ms)
        .map(|effect| format!("{} {}s", effect.kind.name(), effect.remaining_ms(view.now_ms).div_ceil(1000)))
        .collect();
    if !effects.is_empty() {
        frame.push_str(&format!("Active: {}\n", effects.join(", ")));
    }
    if let Some(message) = message {
        frame.push_str(message);
        frame.push('\n');
    }
    frame
}
