use crate::board::{self, BOARD_SIZE};
use crate::types::{GameStatus, Mark, Position};
use crate::win_detector::check_win;

#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Vec<Vec<Mark>>,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: board::new_board(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place(&mut self, position: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if position.row >= BOARD_SIZE || position.col >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }

        if self.board[position.row][position.col] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board[position.row][position.col] = self.current_mark;
        self.last_move = Some(position);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn move_count(&self) -> usize {
        self.board
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if board::is_board_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
