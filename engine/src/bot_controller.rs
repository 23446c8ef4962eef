use std::str::FromStr;

use crate::board::{BOARD_SIZE, get_available_moves};
use crate::game_state::GameState;
use crate::session_rng::SessionRng;
use crate::types::{Mark, Position};
use crate::win_detector::check_win;

const WIN_SCORE: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotDifficulty {
    Random,
    Heuristic,
    Minimax,
}

impl BotDifficulty {
    pub fn name(&self) -> &'static str {
        match self {
            BotDifficulty::Random => "random",
            BotDifficulty::Heuristic => "heuristic",
            BotDifficulty::Minimax => "minimax",
        }
    }
}

impl std::fmt::Display for BotDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BotDifficulty {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(BotDifficulty::Random),
            "heuristic" => Ok(BotDifficulty::Heuristic),
            "minimax" => Ok(BotDifficulty::Minimax),
            other => Err(BotError::UnknownDifficulty(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub enum BotError {
    InvalidRowCount(usize),
    InvalidRowWidth { row: usize, width: usize },
    UnknownDifficulty(String),
}

impl std::fmt::Display for BotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotError::InvalidRowCount(count) => {
                write!(f, "Board must have exactly {} rows, got {}", BOARD_SIZE, count)
            }
            BotError::InvalidRowWidth { row, width } => {
                write!(
                    f,
                    "Board row {} must have exactly {} cells, got {}",
                    row, BOARD_SIZE, width
                )
            }
            BotError::UnknownDifficulty(name) => {
                write!(
                    f,
                    "Unknown difficulty '{}', must be one of: random, heuristic, minimax",
                    name
                )
            }
        }
    }
}

impl std::error::Error for BotError {}

pub struct BotInput {
    pub board: Vec<Vec<Mark>>,
    pub mover_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: state.board.clone(),
            mover_mark: state.current_mark,
        }
    }
}

pub fn calculate_move(
    difficulty: BotDifficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<Option<Position>, BotError> {
    validate_board_shape(&input.board)?;

    Ok(match difficulty {
        BotDifficulty::Random => calculate_random_move(input, rng),
        BotDifficulty::Heuristic => calculate_heuristic_move(input, rng),
        BotDifficulty::Minimax => calculate_minimax_move(input),
    })
}

fn validate_board_shape(board: &[Vec<Mark>]) -> Result<(), BotError> {
    if board.len() != BOARD_SIZE {
        return Err(BotError::InvalidRowCount(board.len()));
    }
    for (row, cells) in board.iter().enumerate() {
        if cells.len() != BOARD_SIZE {
            return Err(BotError::InvalidRowWidth {
                row,
                width: cells.len(),
            });
        }
    }
    Ok(())
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

// Precedence: win, block, center, random corner, random cell.
fn calculate_heuristic_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let mover_mark = input.mover_mark;
    let opponent_mark = mover_mark.opponent()?;
    let available_moves = get_available_moves(&input.board);

    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board.clone();

    if let Some(pos) = find_completing_move(&mut board, mover_mark, &available_moves) {
        return Some(pos);
    }

    if let Some(pos) = find_completing_move(&mut board, opponent_mark, &available_moves) {
        return Some(pos);
    }

    let center = Position::new(1, 1);
    if board[center.row][center.col] == Mark::Empty {
        return Some(center);
    }

    let corners: Vec<Position> = available_moves
        .iter()
        .copied()
        .filter(|pos| pos.row != 1 && pos.col != 1)
        .collect();
    if !corners.is_empty() {
        let idx = rng.random_range(0..corners.len());
        return Some(corners[idx]);
    }

    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

fn find_completing_move(
    board: &mut [Vec<Mark>],
    mark: Mark,
    moves: &[Position],
) -> Option<Position> {
    for &pos in moves {
        board[pos.row][pos.col] = mark;
        let completes = check_win(board) == Some(mark);
        board[pos.row][pos.col] = Mark::Empty;

        if completes {
            return Some(pos);
        }
    }
    None
}

fn calculate_minimax_move(input: &BotInput) -> Option<Position> {
    let mover_mark = input.mover_mark;
    let opponent_mark = mover_mark.opponent()?;
    let available_moves = get_available_moves(&input.board);

    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board.clone();

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for &pos in &available_moves {
        board[pos.row][pos.col] = mover_mark;

        let score = minimax(
            &mut board,
            0,
            false,
            mover_mark,
            opponent_mark,
            i32::MIN,
            i32::MAX,
        );

        board[pos.row][pos.col] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

fn minimax(
    board: &mut [Vec<Mark>],
    depth: i32,
    is_maximizing: bool,
    mover_mark: Mark,
    opponent_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = check_win(board) {
        // Depth adjustment prefers the fastest win and the slowest loss.
        return if winner == mover_mark {
            WIN_SCORE - depth
        } else {
            -WIN_SCORE + depth
        };
    }

    let moves = get_available_moves(board);
    if moves.is_empty() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for &pos in &moves {
            board[pos.row][pos.col] = mover_mark;
            let eval = minimax(
                board,
                depth + 1,
                false,
                mover_mark,
                opponent_mark,
                alpha,
                beta,
            );
            board[pos.row][pos.col] = Mark::Empty;

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for &pos in &moves {
            board[pos.row][pos.col] = opponent_mark;
            let eval = minimax(
                board,
                depth + 1,
                true,
                mover_mark,
                opponent_mark,
                alpha,
                beta,
            );
            board[pos.row][pos.col] = Mark::Empty;

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
