use minas_core::{EngineState, GameEngine};
use std::io::{self, Write};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
    Unfinished,
}

/// Applies `moves` in order, printing the board after each one.
///
/// Moves off the board still count as a turn; the engine ignores them.
/// Stops at the first mine hit or as soon as the game is won.
pub fn play(
    engine: &mut GameEngine,
    moves: &[Move],
    out: &mut impl Write,
) -> io::Result<GameResult> {
    out.write_all(render(engine, false).as_bytes())?;

    for mv in moves {
        log::debug!("Applying move {}", mv);

        let changed = match mv.action {
            Action::Reveal => engine.reveal(mv.coord).has_update(),
            Action::ToggleFlag => engine.toggle_flag(mv.coord).has_update(),
        };
        if !changed {
            log::info!("Move {} left the board unchanged", mv);
        }

        let state = engine.state();
        if state == EngineState::Lost {
            writeln!(out, "BOOM! You hit a mine at {}!", mv.notation)?;
            out.write_all(render(engine, true).as_bytes())?;
            return Ok(GameResult::Lost);
        }

        out.write_all(render(engine, false).as_bytes())?;
        if state.is_finished() {
            writeln!(out, "VICTORY!!!")?;
            return Ok(GameResult::Won);
        }
    }

    writeln!(out, "Game over. No more moves.")?;
    Ok(GameResult::Unfinished)
}
