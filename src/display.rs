//! Styled terminal output shared by every subcommand.

use crossterm::style::Stylize;

const RULE_WIDTH: usize = 60;

/// A full-width separator line of `ch`, unstyled. Callers pick the color.
pub fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

pub fn success(message: &str) {
    println!("{}", message.green());
}

pub fn emphasis(message: &str) {
    println!("{}", message.green().bold());
}

pub fn warning(message: &str) {
    println!("{}", message.yellow());
}

pub fn failure(message: &str) {
    println!("{}", message.red());
}

pub fn hint(message: &str) {
    println!("{}", message.blue());
}

pub fn plain(message: &str) {
    println!("{message}");
}
