use super::board::{Board, DropError, COLS};
use super::Player;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Won(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    result: GameResult,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            result: GameResult::InProgress,
        }
    }

    /// Player to move. After a win this stays on the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn winner(&self) -> Option<Player> {
        match self.result {
            GameResult::Won(player) => Some(player),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }

    pub fn disc_count(&self) -> usize {
        self.board.disc_count()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.result != GameResult::InProgress
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place, returning the row (0 = bottom) the disc landed in.
    ///
    /// A rejected move leaves the state untouched.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current_player.to_cell())
            .map_err(|e| match e {
                DropError::InvalidColumn => MoveError::InvalidColumn {
                    column: i64::try_from(column).unwrap_or(i64::MAX),
                },
                DropError::ColumnFull => MoveError::ColumnFull { column },
            })?;

        // Win check comes first: filling the last cell with a four is a win.
        if self.board.check_win(row, column) {
            self.result = GameResult::Won(self.current_player);
        } else if self.board.is_full() {
            self.result = GameResult::Draw;
        } else {
            self.current_player = self.current_player.other();
        }

        Ok(row)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
