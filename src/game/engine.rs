//! The sink-bound game engine: a [`GameState`] plus textual feedback for
//! every accepted move and every turn announcement.

use std::io::Write;

use tracing::{debug, info, warn};

use super::board::COLS;
use super::state::{GameResult, GameState};
use super::Player;
use crate::error::MoveError;

/// A single Connect Four game that reports its progress to an output sink.
///
/// After each accepted disc the board snapshot is written to the sink, and
/// [`announce_turn`](Self::announce_turn) writes `Player <X> turn`. Rejected
/// moves write nothing and change nothing.
#[derive(Debug)]
pub struct Connect4Engine<W: Write> {
    state: GameState,
    sink: W,
}

impl<W: Write> Connect4Engine<W> {
    /// Start a fresh game: empty board, Red to move.
    pub fn new(sink: W) -> Self {
        Connect4Engine {
            state: GameState::initial(),
            sink,
        }
    }

    /// Drop the current player's disc into `column` (0-based).
    ///
    /// Returns the row the disc landed in, 0 being the bottom.
    pub fn insert_disc(&mut self, column: i64) -> Result<usize, MoveError> {
        let col = usize::try_from(column)
            .ok()
            .filter(|&c| c < COLS)
            .ok_or(MoveError::InvalidColumn { column })?;

        let mover = self.state.current_player();
        let row = self.state.apply_move_mut(col).map_err(|e| {
            debug!(column, error = %e, "move rejected");
            e
        })?;
        debug!(player = %mover, column = col, row, "disc placed");

        let snapshot = self.board_snapshot();
        self.emit(&snapshot);

        match self.state.result() {
            GameResult::Won(winner) => {
                info!(winner = %winner, discs = self.number_of_discs(), "game won")
            }
            GameResult::Draw => info!("game drawn"),
            GameResult::InProgress => {}
        }

        Ok(row)
    }

    pub fn number_of_discs(&self) -> usize {
        self.state.disc_count()
    }

    /// The player to move. Pure; see [`announce_turn`](Self::announce_turn).
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Write the turn notice for the player to move and return that player.
    pub fn announce_turn(&mut self) -> Player {
        let player = self.state.current_player();
        self.emit(&format!("Player {player} turn\n"));
        player
    }

    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn result(&self) -> GameResult {
        self.state.result()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The board as six `|c|c|c|c|c|c|c|` lines, top row first.
    pub fn board_snapshot(&self) -> String {
        self.state.board().render()
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self
            .sink
            .write_all(text.as_bytes())
            .and_then(|()| self.sink.flush())
        {
            warn!(error = %e, "failed to write to output sink");
        }
    }
}
