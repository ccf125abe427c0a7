//! User-facing status lines. All commands print through these so the
//! icons and colors stay consistent.

use crate::errors::RuleViolation;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_DENIED: &str = "⛔";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", CYAN, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ERR, RESET, msg);
}

/// A rejected check-in / check-out. Printed on stdout, next to the
/// records the user is looking at.
pub fn violation(v: RuleViolation) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_DENIED, v, RESET);
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}== {} =={}", CYAN, BOLD, msg, RESET);
}
