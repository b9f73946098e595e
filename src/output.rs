//! Console output: warnings, banners, and fatal error lines.
//!
//! Formatter text and banners go to stdout; warnings and errors go to
//! stderr. Colors are dropped when `NO_COLOR` is set.

use owo_colors::OwoColorize;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Yellow warning line. Callers gate on `silent`.
pub fn warn(message: &str) {
    if use_colors() {
        eprintln!("{} {}", "▲ warning:".yellow().bold(), message);
    } else {
        eprintln!("▲ warning: {}", message);
    }
}

/// Informational note. Callers gate on `silent`.
pub fn note(message: &str) {
    if use_colors() {
        eprintln!("{} {}", "◆ note:".blue().bold(), message);
    } else {
        eprintln!("◆ note: {}", message);
    }
}

/// Red fatal error line. Never suppressed.
pub fn error(message: &str) {
    if use_colors() {
        eprintln!("{} {}", "✖ error:".red().bold(), message);
    } else {
        eprintln!("✖ error: {}", message);
    }
}

/// Red banner shown when a human-readable format ends with failures.
pub fn failure_banner(count: usize) {
    let text = failure_banner_text(count);
    if use_colors() {
        println!("{}", text.red().bold());
    } else {
        println!("{}", text);
    }
}

/// Green banner shown when a human-readable format ends clean.
pub fn success_banner() {
    if use_colors() {
        println!("{}", "✔ no lint failures".green().bold());
    } else {
        println!("✔ no lint failures");
    }
}

/// Banner text, kept pure for testing.
pub fn failure_banner_text(count: usize) -> String {
    format!(
        "✖ {} lint failure{}",
        count,
        if count == 1 { "" } else { "s" }
    )
}
