use tictactoe_engine::bot_controller::{BotDifficulty, BotInput, calculate_move};
use tictactoe_engine::{GameState, GameStatus, Mark, SessionRng, check_win_with_line, log};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeriesResult {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

pub fn run_series(
    games: u32,
    x_difficulty: BotDifficulty,
    o_difficulty: BotDifficulty,
    rng: &mut SessionRng,
) -> Result<SeriesResult, String> {
    let mut result = SeriesResult::default();

    for game_index in 0..games {
        let state = run_game(x_difficulty, o_difficulty, rng)?;

        match state.status {
            GameStatus::XWon => result.x_wins += 1,
            GameStatus::OWon => result.o_wins += 1,
            _ => result.draws += 1,
        }

        report_game(game_index, &state);
    }

    Ok(result)
}

fn run_game(
    x_difficulty: BotDifficulty,
    o_difficulty: BotDifficulty,
    rng: &mut SessionRng,
) -> Result<GameState, String> {
    let mut state = GameState::new();

    while state.status == GameStatus::InProgress {
        let difficulty = match state.current_mark {
            Mark::O => o_difficulty,
            _ => x_difficulty,
        };

        let input = BotInput::from_game_state(&state);
        let calculated = calculate_move(difficulty, &input, rng).map_err(|e| e.to_string())?;

        let Some(position) = calculated else {
            break;
        };

        state.place(position)?;
    }

    Ok(state)
}

fn report_game(game_index: u32, state: &GameState) {
    match state.winner() {
        Some(winner) => {
            let line = check_win_with_line(&state.board)
                .map(|l| {
                    format!(
                        " line ({},{})-({},{})",
                        l.start.row, l.start.col, l.end.row, l.end.col
                    )
                })
                .unwrap_or_default();
            log!(
                "Game {}: {} won in {} moves{}",
                game_index + 1,
                winner,
                state.move_count(),
                line
            );
        }
        None => {
            log!("Game {}: draw in {} moves", game_index + 1, state.move_count());
        }
    }
}
