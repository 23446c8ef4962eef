pub mod ai_game;
pub mod board;
pub mod bot_controller;
pub mod game_state;
pub mod logger;
pub mod session_rng;
pub mod types;
pub mod win_detector;

pub use ai_game::AiGame;
pub use bot_controller::{BotDifficulty, BotError, BotInput, calculate_move};
pub use game_state::GameState;
pub use session_rng::SessionRng;
pub use types::{GameStatus, Mark, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
