//! Line helpers for the menu. Everything goes to the writer the shell owns,
//! so tests can capture it.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::ui::Theme;

/// Marks that prefix each kind of message
pub const CONFIRM_MARK: &str = "✅";
pub const REJECT_MARK: &str = "❌";
pub const CAUTION_MARK: &str = "⚠️";
pub const NOTICE_MARK: &str = "ℹ️";
pub const FAREWELL_MARK: &str = "👋";

pub fn section(out: &mut impl Write, theme: &Theme, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("--- {} ---", title).style(theme.heading))
}

pub fn rule(out: &mut impl Write, theme: &Theme, width: usize) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(width).style(theme.rule))
}

pub fn success(out: &mut impl Write, theme: &Theme, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", CONFIRM_MARK, label.style(theme.confirm))
}

pub fn reject(out: &mut impl Write, theme: &Theme, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", REJECT_MARK, label.style(theme.reject))
}

pub fn warn(out: &mut impl Write, theme: &Theme, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", CAUTION_MARK, label.style(theme.caution))
}

pub fn info(out: &mut impl Write, theme: &Theme, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", NOTICE_MARK, label.style(theme.notice))
}

pub fn farewell(out: &mut impl Write, theme: &Theme, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", FAREWELL_MARK, label.style(theme.farewell))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_theme_emits_no_escape_codes() {
        let theme = Theme::plain();
        let text = render(|out| section(out, &theme, "Contact List"));
        assert_eq!(text, "\n--- Contact List ---\n");

        let text = render(|out| success(out, &theme, "done"));
        assert_eq!(text, format!("{} done\n", CONFIRM_MARK));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_rule_width() {
        let theme = Theme::plain();
        assert_eq!(render(|out| rule(out, &theme, 5)), "-----\n");
    }
}
