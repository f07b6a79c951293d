use std::io::BufRead;
use std::time::Duration;

use snake_engine::game::{suggest_player_move, GameEvent, GameSession, SessionPhase};
use snake_engine::{log, SessionRng};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::input::parse_command;
use crate::terminal_renderer::TerminalRenderer;

/// Everything the session reacts to, funnelled through one queue.
#[derive(Debug)]
pub enum LoopEvent {
    Frame,
    Input(String),
    InputClosed,
    Despawn { token: u64 },
}

pub struct LoopConfig {
    pub frame_rate: u32,
    pub autopilot: bool,
}

fn spawn_frame_ticker(tx: mpsc::UnboundedSender<LoopEvent>, frame_rate: u32) -> JoinHandle<()> {
    let period = Duration::from_secs_f64(1.0 / f64::from(frame_rate.max(1)));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(LoopEvent::Frame).is_err() {
                break;
            }
        }
    })
}

/// Blocking stdin reads live on their own thread so a pending read never
/// holds up runtime shutdown.
fn spawn_input_reader(tx: mpsc::UnboundedSender<LoopEvent>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(LoopEvent::Input(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(LoopEvent::InputClosed);
    });
}

fn spawn_despawn_timer(
    tx: mpsc::UnboundedSender<LoopEvent>,
    clock_start: Instant,
    despawn_at_ms: u64,
    token: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep_until(clock_start + Duration::from_millis(despawn_at_ms)).await;
        let _ = tx.send(LoopEvent::Despawn { token });
    })
}

/// Runs one session to completion: game over, `q`, or stdin closing without
/// autopilot.
pub async fn run<W: std::io::Write>(
    session: &mut GameSession,
    renderer: &mut TerminalRenderer<W>,
    config: LoopConfig,
) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let clock_start = Instant::now();
    let mut tasks = vec![spawn_frame_ticker(tx.clone(), config.frame_rate)];
    spawn_input_reader(tx.clone());
    let mut pilot_rng = SessionRng::new(session.seed());

    session.start(0);

    loop {
        for event in session.drain_events() {
            if let GameEvent::PowerUpSpawned(spawned) = event {
                tasks.push(spawn_despawn_timer(
                    tx.clone(),
                    clock_start,
                    spawned.despawn_at_ms(),
                    spawned.token,
                ));
            }
            renderer.announce(&event);
        }
        tasks.retain(|task| !task.is_finished());

        if session.phase() == SessionPhase::Over {
            break;
        }
        let Some(event) = rx.recv().await else {
            break;
        };

        let now_ms = clock_start.elapsed().as_millis() as u64;
        match event {
            LoopEvent::Frame => {
                if config.autopilot
                    && session.phase() == SessionPhase::Running
                    && let Some(direction) = suggest_player_move(session.state(), &mut pilot_rng)
                {
                    session.turn(direction);
                }
                let outcome = session.on_frame(now_ms, renderer);
                if !outcome.keeps_running() {
                    log!("Frame loop stopping: {:?}", outcome);
                }
            }
            LoopEvent::Input(line) => match parse_command(&line) {
                Some(command) => {
                    session.apply(command);
                }
                None => log!("Ignoring input {:?}", line),
            },
            LoopEvent::InputClosed => {
                if !config.autopilot {
                    log!("Input closed, ending session");
                    session.end();
                }
            }
            LoopEvent::Despawn { token } => {
                session.despawn_power_up(token);
            }
        }
    }

    for task in tasks {
        task.abort();
    }
}
