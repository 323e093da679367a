//! Text rendering of boards, status and history.

use std::fmt::{self, Write};
use strictly_connect_five::{
    BoardError, Cell, Game, GameStatus, History, Line, Mark, SIDE, Snapshot, Variant,
};

/// Cells in one row-by-column plane.
const PLANE: usize = SIDE * SIDE;

fn symbol(cell: Cell) -> char {
    match cell.mark() {
        None => '.',
        Some(Mark::X) => 'X',
        Some(Mark::O) => 'O',
    }
}

/// Renders every plane of a snapshot; cells of `highlight` are bracketed.
///
/// Stacked boards print one plane per layer, each headed by its layer number.
pub fn render_board<V: Variant>(
    snapshot: &Snapshot<V>,
    highlight: Option<&Line>,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let layered = V::DIMENSIONS > 2;

    for (layer, plane) in snapshot.cells().chunks(PLANE).enumerate() {
        if layered {
            writeln!(out, "Layer {}", layer)?;
        }

        out.push_str("  ");
        for col in 0..SIDE {
            write!(out, " {} ", col)?;
        }
        out.push('\n');

        for (row, cells) in plane.chunks(SIDE).enumerate() {
            write!(out, "{} ", row)?;
            for (col, &cell) in cells.iter().enumerate() {
                let index = layer * PLANE + row * SIDE + col;
                if highlight.is_some_and(|line| line.contains(index)) {
                    write!(out, "[{}]", symbol(cell))?;
                } else {
                    write!(out, " {} ", symbol(cell))?;
                }
            }
            out.push('\n');
        }
    }
    Ok(out)
}

/// Status line shown under the board.
pub fn render_status<V: Variant>(game: &Game<V>) -> String {
    match game.status() {
        GameStatus::Won(mark) => format!("Winner: {}", mark),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::InProgress => format!("Next player: {}", game.current_player()),
    }
}

/// Lists history entries, marking the current one with `>`.
pub fn render_history<V: Variant>(history: &History<V>) -> Result<String, fmt::Error> {
    let moves = history.moves();
    let mut out = String::new();

    for (index, label) in history.entry_labels().into_iter().enumerate() {
        let marker = if index == history.position() { '>' } else { ' ' };
        write!(out, "{} {:>3}. {}", marker, index, label)?;

        if let Some(action) = index.checked_sub(1).and_then(|k| moves.get(k)) {
            match V::coord(action.index) {
                Ok(coord) => write!(out, " ({} at {:?})", action.mark, coord)?,
                Err(_) => write!(out, " ({} at cell {})", action.mark, action.index)?,
            }
        }
        out.push('\n');
    }
    Ok(out)
}

/// Board, status and highlight for the current position.
pub fn render_game<V: Variant>(game: &Game<V>) -> Result<String, fmt::Error> {
    let highlight = game.winning_line().map(|(_, line)| line);
    let board = render_board(game.current_snapshot(), highlight)?;
    Ok(format!("{}{}\n", board, render_status(game)))
}

/// One winning line as a list of coordinates.
pub fn render_line<V: Variant>(line: &Line) -> Result<String, BoardError> {
    let coords = line
        .into_iter()
        .map(|&index| V::coord(index).map(|c| format!("{:?}", c)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(coords.join(" "))
}
