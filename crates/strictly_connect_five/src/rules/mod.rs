//! Game rules for five-in-a-row.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from snapshot storage so they can be composed
//! into contracts and reused by every variant.

mod draw;
mod lines;
mod win;

pub use draw::{is_draw, is_full, status};
pub use lines::{Line, generate_lines};
pub use win::{winner_of, winning_line};
