//! Terminal presentation: progress lines, dependency tables, error reports.

mod console;
mod errors;
mod style;

pub use console::ConsoleObserver;
pub use errors::report_error;
pub use style::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
