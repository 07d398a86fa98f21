//! Game rules: win detection

pub mod win;

pub use win::{is_win_at, winning_line};
