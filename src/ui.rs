//! Terminal output helpers.
//!
//! Pure formatting functions (no I/O side effects beyond printing).

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print the valid command names after an unrecognized token.
pub fn display_available_commands(names: &[&str]) {
    eprintln!("Available commands: {}", names.join(", "));
}
