//! Terminal output formatting
//!
//! Everything that maps feedback to colors, emoji and layout lives here; the
//! game core only hands over records and statuses.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_rejection, print_round_over, print_statistics,
};
