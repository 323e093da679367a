//! Interactive play over a line-oriented reader and writer.
//!
//! This is the presentation layer: it converts typed coordinates to cell
//! indices, checks that a cell is free and the game undecided before
//! calling the core, and reports ignored input instead of failing.

use crate::command::{HELP, ReplCommand};
use crate::render;
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_connect_five::{Game, Variant};
use tracing::{debug, info, instrument, warn};

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop reading.
    Quit,
}

/// One interactive game.
#[derive(Debug)]
pub struct Session<V: Variant> {
    game: Game<V>,
}

impl<V: Variant> Session<V> {
    /// Creates a session on an empty board.
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game<V> {
        &self.game
    }

    /// Executes one command, writing any output to `out`.
    #[instrument(skip(self, out))]
    pub fn handle(&mut self, command: ReplCommand, out: &mut impl Write) -> Result<Flow> {
        match command {
            ReplCommand::Place(coords) => self.place(&coords, out)?,
            ReplCommand::Jump(index) => match self.game.jump_to(index) {
                Ok(()) => write!(out, "{}", render::render_game(&self.game)?)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            ReplCommand::History => {
                write!(out, "{}", render::render_history(self.game.history())?)?
            }
            ReplCommand::Board => write!(out, "{}", render::render_game(&self.game)?)?,
            ReplCommand::Help => writeln!(out, "{}", HELP)?,
            ReplCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn place(&mut self, coords: &[usize], out: &mut impl Write) -> Result<()> {
        if let Some(winner) = self.game.winner() {
            debug!(%winner, "Ignoring move on finished board");
            writeln!(out, "{} has already won; jump back to keep playing.", winner)?;
            return Ok(());
        }

        let index = match V::index_of(coords) {
            Ok(index) => index,
            Err(e) => {
                writeln!(out, "{}", e)?;
                return Ok(());
            }
        };

        if !self.game.current_snapshot().cell_at(index)?.is_empty() {
            debug!(index, "Ignoring move on occupied cell");
            writeln!(out, "That cell is taken.")?;
            return Ok(());
        }

        match self.game.place(index) {
            Ok(_) => write!(out, "{}", render::render_game(&self.game)?)?,
            Err(e) => {
                warn!(error = %e, "Core rejected a pre-checked move");
                writeln!(out, "{}", e)?;
            }
        }
        Ok(())
    }
}

impl<V: Variant> Default for Session<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads commands until `quit` or end of input.
#[instrument(skip(input, output))]
pub fn run_interactive<V: Variant>(input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut session = Session::<V>::new();
    info!(variant = %V::KIND, "Interactive session started");

    writeln!(output, "Strictly Connect Five ({}). Type 'help' for commands.", V::KIND)?;
    write!(output, "{}", render::render_game(session.game())?)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let flow = match line.parse::<ReplCommand>() {
            Ok(command) => session.handle(command, &mut output)?,
            Err(e) => {
                writeln!(output, "{}. Type 'help' for commands.", e)?;
                Flow::Continue
            }
        };
        output.flush()?;

        if flow == Flow::Quit {
            break;
        }
    }

    info!(moves = session.game().history().position(), "Interactive session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_connect_five::{Cell, Flat, Mark, Stacked};

    fn run<V: Variant>(script: &str) -> String {
        let mut output = Vec::new();
        run_interactive::<V>(script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_place_and_quit() {
        let text = run::<Flat>("place 2 2\nquit\nplace 0 0\n");
        assert!(text.contains("Next player: O"));
        assert_eq!(text.matches("Next player").count(), 2);
    }

    #[test]
    fn test_default_session_starts_empty() {
        let session = Session::<Stacked>::default();
        assert_eq!(session.game().history().len(), 1);
        assert_eq!(session.game().current_player(), Mark::X);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut session = Session::<Flat>::new();
        let mut out = Vec::new();
        session.handle(ReplCommand::Place(vec![1, 1]), &mut out).unwrap();
        out.clear();

        session.handle(ReplCommand::Place(vec![1, 1]), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "That cell is taken.\n");
        assert_eq!(session.game().history().len(), 2);
    }

    #[test]
    fn test_finished_board_is_ignored() {
        let mut session = Session::<Flat>::new();
        let mut out = Vec::new();
        for coords in [[0, 0], [1, 0], [0, 1], [1, 1], [0, 2], [1, 2], [0, 3], [1, 3], [0, 4]] {
            session.handle(ReplCommand::Place(coords.to_vec()), &mut out).unwrap();
        }
        out.clear();

        session.handle(ReplCommand::Place(vec![4, 4]), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "X has already won; jump back to keep playing.\n"
        );
        assert_eq!(session.game().history().len(), 10);
    }

    #[test]
    fn test_bad_coordinates_are_reported() {
        let mut session = Session::<Stacked>::new();
        let mut out = Vec::new();
        session.handle(ReplCommand::Place(vec![1, 1]), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Expected 3 coordinates, found 2\n"
        );

        let mut out = Vec::new();
        session.handle(ReplCommand::Place(vec![0, 7, 1]), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Coordinate 7 on axis 1 is outside the board\n"
        );
    }

    #[test]
    fn test_jump_then_place_truncates() {
        let text = run::<Flat>("p 0 0\np 4 4\np 2 2\njump 1\np 3 3\nhistory\n");
        assert!(text.contains(">   2. Go to move #2 (O at [3, 3])"));
        assert!(!text.contains("3. Go to move #3"));
    }

    #[test]
    fn test_jump_out_of_range_is_reported() {
        let text = run::<Flat>("jump 5\n");
        assert!(text.contains("History index 5 is out of range (history has 1 entries)"));
    }

    #[test]
    fn test_unknown_command_is_reported() {
        let text = run::<Flat>("fly away\n");
        assert!(text.contains("Unknown command 'fly'. Type 'help' for commands."));
    }

    #[test]
    fn test_stacked_session_places_in_layers() {
        let mut session = Session::<Stacked>::new();
        let mut out = Vec::new();
        session.handle(ReplCommand::Place(vec![3, 0, 1]), &mut out).unwrap();
        assert_eq!(
            session.game().current_snapshot().cell_at(76),
            Ok(Cell::Occupied(Mark::X))
        );
        assert_eq!(session.handle(ReplCommand::Quit, &mut out).unwrap(), Flow::Quit);
    }
}
