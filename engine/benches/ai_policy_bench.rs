use criterion::{criterion_group, criterion_main, Criterion};
use snake_engine::game::{
    AiController, AiInput, Difficulty, Direction, GameState, Grid, Point, SessionSettings, Snake,
};
use snake_engine::SessionRng;
use std::hint::black_box;

/// Serpentine body filling `rows` rows of the board, head at the top left.
fn serpentine(tile_count: i32, rows: i32) -> Snake {
    let mut cells = Vec::new();
    for y in 0..rows {
        let xs: Vec<i32> = if y % 2 == 0 {
            (0..tile_count).collect()
        } else {
            (0..tile_count).rev().collect()
        };
        cells.extend(xs.into_iter().map(|x| Point::new(x, y)));
    }
    cells.reverse();
    Snake::from_segments(cells, Direction::Down).unwrap()
}

fn crowded_state() -> GameState {
    let mut state = GameState::new(&SessionSettings {
        tile_count: 25,
        ai_enabled: true,
        ai_difficulty: Difficulty::Hard,
        ..SessionSettings::default()
    });
    state.player = serpentine(25, 12);
    if let Some(ai) = state.ai.as_mut() {
        ai.snake = Snake::from_segments(
            (5..20).map(|x| Point::new(x, 18)).collect(),
            Direction::Left,
        )
        .unwrap();
    }
    state.food = Point::new(24, 24);
    state
}

fn bench_ai_move_open_board(c: &mut Criterion) {
    c.bench_function("ai_move_20x20_open", |b| {
        let grid = Grid::new(20);
        let snake = Snake::new(Point::new(5, 5));
        let mut rng = SessionRng::new(42);
        b.iter(|| {
            let input = AiInput {
                snake: &snake,
                opponent: None,
                food: Point::new(15, 12),
                grid: &grid,
                last_direction: Some(Direction::Right),
                difficulty: Difficulty::Easy,
            };
            AiController::calculate_move(black_box(&input), &mut rng)
        });
    });
}

fn bench_ai_move_crowded_board(c: &mut Criterion) {
    c.bench_function("ai_move_25x25_crowded", |b| {
        let state = crowded_state();
        let mut rng = SessionRng::new(42);
        b.iter(|| {
            let ai = state.ai.as_ref().unwrap();
            let input = AiInput {
                snake: &ai.snake,
                opponent: Some(&state.player),
                food: state.food,
                grid: &state.grid,
                last_direction: ai.last_direction(),
                difficulty: Difficulty::Hard,
            };
            AiController::calculate_move(black_box(&input), &mut rng)
        });
    });
}

fn bench_full_tick_crowded_board(c: &mut Criterion) {
    c.bench_function("tick_25x25_crowded", |b| {
        let template = crowded_state();
        b.iter(|| {
            let mut state = template.clone();
            let mut rng = SessionRng::new(42);
            let mut events = Vec::new();
            for step in 0..10u64 {
                state.update(step * 56, &mut rng, &mut events);
            }
            black_box(state.player_score)
        });
    });
}

criterion_group!(
    benches,
    bench_ai_move_open_board,
    bench_ai_move_crowded_board,
    bench_full_tick_crowded_board
);
criterion_main!(benches);
