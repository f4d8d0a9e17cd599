//! Terminal output utilities.

use crossterm::style::{StyledContent, Stylize};
use randkey::Strength;

// ============================================================================
// Terminal Control
// ============================================================================

/// True when stdout is a terminal, so styling is safe to emit.
pub fn is_tty() -> bool {
    unsafe { libc::isatty(1) == 1 }
}

// ============================================================================
// Result Display
// ============================================================================

/// Strength label colored like a traffic light.
pub fn styled_strength(strength: Strength) -> StyledContent<&'static str> {
    let label = strength.as_str();
    match strength {
        Strength::Weak => label.red(),
        Strength::Medium => label.yellow(),
        Strength::Strong => label.green(),
    }
}

/// Print the strength line under a password.
pub fn print_strength(strength: Strength, entropy: f64, charset: usize) {
    let detail = format!("{:.1} bits \u{2022} charset {} chars", entropy, charset);
    if is_tty() {
        println!("  Strength: {} ({})", styled_strength(strength), detail.dim());
    } else {
        println!("  Strength: {} ({})", strength, detail);
    }
}

/// Print the entropy line under a key.
pub fn print_key_info(bytes: usize, entropy: f64, chars: usize) {
    let detail = format!(
        "{} bytes \u{2022} {:.0} bits \u{2022} {} chars",
        bytes, entropy, chars
    );
    if is_tty() {
        println!("  {}", detail.dim());
    } else {
        println!("  {}", detail);
    }
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let lines = wrap(desc, desc_col);

    if let Some(first) = lines.first() {
        let padding = desc_col.saturating_sub(first.len());
        println!("│ {}{}{} │", flag_padded, first, " ".repeat(padding));
    } else {
        println!("│ {}{} │", flag_padded, " ".repeat(desc_col));
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Greedy word wrap to `width` columns.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_width_skips_ansi() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width("\x1b[31mred\x1b[0m"), 3);
        let styled = format!("{}", styled_strength(Strength::Strong));
        assert_eq!(console_width(&styled), "Strong".len());
    }

    #[test]
    fn test_wrap() {
        assert!(wrap("", 10).is_empty());
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("averyveryverylongword", 5), vec!["averyveryverylongword"]);
    }
}
