//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, hints
//! - Bold: headers, values
//! - Dimmed: secondary info

use console::{pad_str, style, Alignment};
use std::borrow::Cow;
use std::fmt::Display;

const RULE_WIDTH: usize = 56;
const VALUE_WIDTH: usize = 24;

/// Mask shown in place of secret values.
pub const MASK: &str = "********";

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ wrote key.properties`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ invalid config`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ signing with the debug identity`
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ place the keystore at app/upt-lab-keystore.jks`
pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        println!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold), padded to align.
///
/// Example: `  keyAlias       upload`
pub fn kv(label: &str, value: impl Display) {
    let label = format!("{:<14}", label);
    if colors_enabled() {
        println!("  {} {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {} {}", label, value);
    }
}

/// Print a key-value pair with a dimmed annotation after the value.
///
/// Example: `  keyPassword    ********  (environment)`
pub fn kv_note(label: &str, value: impl Display, note: impl Display) {
    let label = format!("{:<14}", label);
    let value = value.to_string();
    let value = pad_value(&value);
    if colors_enabled() {
        println!(
            "  {} {} {}",
            style(label).dim(),
            style(value).bold(),
            style(format!("({})", note)).dim()
        );
    } else {
        println!("  {} {} ({})", label, value, note);
    }
}

/// Pad `value` to the value column. Width ignores ANSI codes, so pre-styled
/// values such as paths still line up.
fn pad_value(value: &str) -> Cow<'_, str> {
    pad_str(value, VALUE_WIDTH, Alignment::Left, None)
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Format a path in cyan.
pub fn path(p: &std::path::Path) -> String {
    if colors_enabled() {
        style(p.display()).cyan().to_string()
    } else {
        p.display().to_string()
    }
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}

/// Print raw data (JSON, exported files) without decoration.
pub fn data(content: &str) {
    print!("{}", content);
    if !content.ends_with('\n') {
        println!();
    }
}

/// Print a blank line.
pub fn blank() {
    println!();
}

/// Print a section header with a separator line.
///
/// Example:
/// ```text
/// Signing credentials
/// ────────────────────────────────────────────────────────
/// ```
pub fn section(title: &str) {
    header(title);
    rule();
}
