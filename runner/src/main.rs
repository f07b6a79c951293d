mod event_loop;
mod input;
mod terminal_renderer;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use snake_engine::config::{
    FileRecordStore, GameSettings, GameSize, RecordManager, Scoreboard, YamlRecordSerializer,
    SCOREBOARD_KEY, SETTINGS_KEY,
};
use snake_engine::game::{Difficulty, EndReason, GameSession, SessionSettings};
use snake_engine::logger::{self, LogTarget};
use snake_engine::names::generate_anonymous_name;
use snake_engine::{log, SessionRng};

use event_loop::LoopConfig;
use terminal_renderer::TerminalRenderer;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SizeArg {
    Small,
    Medium,
    Large,
}

impl From<SizeArg> for GameSize {
    fn from(value: SizeArg) -> Self {
        match value {
            SizeArg::Small => GameSize::Small,
            SizeArg::Medium => GameSize::Medium,
            SizeArg::Large => GameSize::Large,
        }
    }
}

#[derive(Parser)]
#[command(name = "snake_runner", about = "Play snake in the terminal")]
struct Args {
    /// Directory holding settings.yaml and scoreboard.yaml
    #[arg(long, default_value = "snake_arena_data")]
    data_dir: PathBuf,
    /// Replay a session by seed
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,
    #[arg(long, value_enum)]
    size: Option<SizeArg>,
    /// Enable or disable the AI opponent
    #[arg(long)]
    ai: Option<bool>,
    #[arg(long, value_enum)]
    ai_difficulty: Option<DifficultyArg>,
    /// Let the greedy policy steer the player
    #[arg(long)]
    autopilot: bool,
    /// Host frames per second
    #[arg(long, default_value_t = 60)]
    frame_rate: u32,
    /// Log to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
    /// Name for the scoreboard; a generated one is used if omitted
    #[arg(long)]
    name: Option<String>,
    /// Persist the overrides above as the new defaults
    #[arg(long)]
    save_settings: bool,
}

impl Args {
    fn apply_overrides(&self, settings: &mut GameSettings) {
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty.into();
        }
        if let Some(size) = self.size {
            settings.game_size = size.into();
        }
        if let Some(ai) = self.ai {
            settings.ai_enabled = ai;
        }
        if let Some(ai_difficulty) = self.ai_difficulty {
            settings.ai_difficulty = ai_difficulty.into();
        }
    }
}

type YamlRecords<T> = RecordManager<FileRecordStore, T, YamlRecordSerializer>;

fn record_score(
    scoreboard_manager: &YamlRecords<Scoreboard>,
    score: u32,
    difficulty: Difficulty,
    name: Option<&str>,
) -> Result<(), String> {
    let mut scoreboard = scoreboard_manager.load();
    if !scoreboard.qualifies(score) {
        println!("Final score: {}", score);
        return Ok(());
    }

    let name = match name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => generate_anonymous_name(),
    };
    if let Some(rank) = scoreboard.add_score(&name, score, difficulty) {
        scoreboard_manager.save(&scoreboard)?;
        println!("New high score! {} placed #{} with {}", name, rank, score);
    }

    for (index, entry) in scoreboard.entries().iter().enumerate() {
        println!(
            "{:>2}. {:<24} {:>5}  ({}, {})",
            index + 1,
            entry.name,
            entry.score,
            entry.difficulty.label(),
            entry.date
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Runner".to_string());
    let target = match &args.log_file {
        Some(path) => LogTarget::File(path.clone()),
        None => LogTarget::Stderr,
    };
    logger::init_logger(prefix, target)?;

    let settings_manager: YamlRecords<GameSettings> =
        RecordManager::yaml_in_dir(&args.data_dir, SETTINGS_KEY);
    let scoreboard_manager: YamlRecords<Scoreboard> =
        RecordManager::yaml_in_dir(&args.data_dir, SCOREBOARD_KEY);

    let mut settings = settings_manager.load();
    args.apply_overrides(&mut settings);
    if args.save_settings {
        settings_manager.save(&settings)?;
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let mut session = GameSession::new(SessionSettings::from(&settings), rng);
    let mut renderer = TerminalRenderer::new(std::io::stdout(), settings.sound_enabled);
    let config = LoopConfig {
        frame_rate: args.frame_rate,
        autopilot: args.autopilot,
    };
    event_loop::run(&mut session, &mut renderer, config).await;

    match session.end_reason() {
        Some(EndReason::Collision(kind)) => {
            println!("Game over: you {}", kind.describe());
            record_score(&scoreboard_manager, session.score(), settings.difficulty, args.name.as_deref())?;
        }
        Some(EndReason::Ended) | None => println!("Session ended with score {}", session.score()),
    }

    Ok(())
}
