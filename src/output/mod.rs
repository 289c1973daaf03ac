//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_loss_banner, print_win_banner};
pub use formatters::{colored_cell, colored_row};
