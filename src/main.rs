mod report;

use std::{io::Write, time::Instant};

use anyhow::Context;
use common::{DEFAULT_EMPTY_HOLE, DEFAULT_ROWS, GameState, Jump, search::search};

use crate::report::Report;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let start_time = Instant::now();

    let start = GameState::new(DEFAULT_ROWS, DEFAULT_EMPTY_HOLE)
        .context("invalid starting board")?;
    log::info!(
        "searching {} rows with {DEFAULT_EMPTY_HOLE} empty, {} pegs",
        start.row_count(),
        start.pegs_remaining()
    );

    let stats = search(&start);

    let elapsed = start_time.elapsed();
    log::info!(
        "played {} games, {} solutions in {}s",
        stats.games_played,
        stats.solutions_found(),
        elapsed.as_secs_f32()
    );

    if log::log_enabled!(log::Level::Debug) {
        if let Some(solution) = stats.solutions.first() {
            log_solution(start, solution);
        }
    }

    let report = Report::new(&stats, elapsed);
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{report}").context("failed to write report")?;
    stdout.flush().context("failed to write report")?;

    Ok(())
}

/// Replay a solution, drawing the board before every jump.
fn log_solution(start: GameState, jumps: &[Jump]) {
    log::debug!("first solution:");
    let mut pos = start;
    for (i, &jump) in jumps.iter().enumerate() {
        log::debug!("jump {}: {jump}\n{}", i + 1, pos.draw_with_jump(jump));
        pos = pos.apply_jump(jump);
    }
    log::debug!("final board:\n{pos}");
}
