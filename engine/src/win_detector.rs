use crate::types::{Mark, Position, WinningLine};

// 3 rows, 3 columns, 2 diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(board: &[Vec<Mark>]) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &[Vec<Mark>]) -> Option<WinningLine> {
    for line in &LINES {
        let (first_row, first_col) = line[0];
        let mark = board[first_row][first_col];
        if mark == Mark::Empty {
            continue;
        }

        if line.iter().all(|&(row, col)| board[row][col] == mark) {
            let (last_row, last_col) = line[2];
            return Some(WinningLine::new(
                mark,
                Position::new(first_row, first_col),
                Position::new(last_row, last_col),
            ));
        }
    }

    None
}
