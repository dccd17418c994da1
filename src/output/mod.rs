//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{
    print_import_report, print_keyboard, print_loss, print_result_row, print_share_grid,
    print_stats, print_win,
};
pub use formatters::{KEYBOARD_ROWS, keyboard_rows, result_row, share_grid, share_row, tile};
