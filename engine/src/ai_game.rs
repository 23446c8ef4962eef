use crate::bot_controller::{BotDifficulty, BotInput, calculate_move};
use crate::game_state::GameState;
use crate::session_rng::SessionRng;
use crate::types::{GameStatus, Mark, Position};

/// Single-player game: one human side, one bot side driven by the selector.
pub struct AiGame {
    state: GameState,
    difficulty: BotDifficulty,
    bot_mark: Mark,
    rng: SessionRng,
}

impl AiGame {
    pub fn new(difficulty: BotDifficulty, bot_mark: Mark, seed: u64) -> Result<Self, String> {
        if bot_mark == Mark::Empty {
            return Err("Bot mark must be X or O".to_string());
        }

        Ok(Self {
            state: GameState::new(),
            difficulty,
            bot_mark,
            rng: SessionRng::new(seed),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn difficulty(&self) -> BotDifficulty {
        self.difficulty
    }

    pub fn bot_mark(&self) -> Mark {
        self.bot_mark
    }

    /// Applies the human move, then the bot reply if the game continues.
    /// Returns the bot's reply position, if one was made.
    pub fn play(&mut self, position: Position) -> Result<Option<Position>, String> {
        if self.state.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }
        if self.state.current_mark == self.bot_mark {
            return Err("It is the bot's turn".to_string());
        }

        self.state.place(position)?;
        self.play_bot_turn()
    }

    /// Makes the bot move when it is the bot's turn. Used directly when the
    /// bot plays the opening move.
    pub fn play_bot_turn(&mut self) -> Result<Option<Position>, String> {
        if self.state.status != GameStatus::InProgress || self.state.current_mark != self.bot_mark
        {
            return Ok(None);
        }

        let bot_input = BotInput::from_game_state(&self.state);
        let reply = calculate_move(self.difficulty, &bot_input, &mut self.rng)
            .map_err(|e| e.to_string())?;

        let Some(position) = reply else {
            return Ok(None);
        };

        self.state.place(position)?;
        Ok(Some(position))
    }

    /// Restarts the game, keeping difficulty and marks.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_bot_mark() {
        assert!(AiGame::new(BotDifficulty::Random, Mark::Empty, 0).is_err());
    }

    #[test]
    fn test_human_move_triggers_bot_reply() {
        let mut game = AiGame::new(BotDifficulty::Minimax, Mark::O, 0).unwrap();
        let reply = game.play(Position::new(1, 1)).unwrap().unwrap();

        assert_eq!(game.state().board[1][1], Mark::X);
        assert_eq!(game.state().board[reply.row][reply.col], Mark::O);
        assert_eq!(game.state().current_mark, Mark::X);
        assert_eq!(game.state().move_count(), 2);
    }

    #[test]
    fn test_bot_plays_opening_when_it_holds_x() {
        let mut game = AiGame::new(BotDifficulty::Heuristic, Mark::X, 0).unwrap();
        let opening = game.play_bot_turn().unwrap().unwrap();

        assert_eq!(game.state().board[opening.row][opening.col], Mark::X);
        assert_eq!(game.state().current_mark, Mark::O);
    }

    #[test]
    fn test_rejects_human_move_on_bot_turn() {
        let mut game = AiGame::new(BotDifficulty::Random, Mark::X, 0).unwrap();
        let result = game.play(Position::new(0, 0));
        assert_eq!(result, Err("It is the bot's turn".to_string()));
    }

    #[test]
    fn test_full_game_against_minimax_ends_without_human_win() {
        let mut game = AiGame::new(BotDifficulty::Minimax, Mark::O, 7).unwrap();
        let mut probe_rng = SessionRng::new(7);

        while game.state().status == GameStatus::InProgress {
            let input = BotInput::from_game_state(game.state());
            let Some(human_move) =
                calculate_move(BotDifficulty::Random, &input, &mut probe_rng).unwrap()
            else {
                break;
            };
            game.play(human_move).unwrap();
        }

        assert_ne!(game.state().status, GameStatus::XWon);
    }

    #[test]
    fn test_reset_preserves_mode() {
        let mut game = AiGame::new(BotDifficulty::Heuristic, Mark::O, 3).unwrap();
        game.play(Position::new(0, 0)).unwrap();
        game.reset();

        assert_eq!(game.state().move_count(), 0);
        assert_eq!(game.difficulty(), BotDifficulty::Heuristic);
        assert_eq!(game.bot_mark(), Mark::O);
    }
}
