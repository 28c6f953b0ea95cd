//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They never touch engine
//! state, so the machine can evaluate hypothetical boards with them freely.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{has_won, winning_line, WINNING_LINES};
