//! Colors for each kind of line the menu prints

use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Theme {
    /// Menu title and listing headers
    pub heading: Style,
    /// Contact added / removed
    pub confirm: Style,
    /// Menu choice outside 1-5
    pub reject: Style,
    /// Malformed id on delete
    pub caution: Style,
    /// Empty list, search without hits
    pub notice: Style,
    /// Separator lines under the menu and listings
    pub rule: Style,
    pub farewell: Style,
}

impl Theme {
    /// Follows `console`'s stdout color detection (TTY, `CLICOLOR`, `NO_COLOR`)
    pub fn detect() -> Self {
        if console::colors_enabled() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn colored() -> Self {
        Self {
            heading: Style::new().cyan().bold(),
            confirm: Style::new().green().bold(),
            reject: Style::new().red().bold(),
            caution: Style::new().yellow().bold(),
            notice: Style::new().magenta(),
            rule: Style::new().bright_black(),
            farewell: Style::new().white().dimmed(),
        }
    }

    pub fn plain() -> Self {
        let none = Style::new();
        Self {
            heading: none,
            confirm: none,
            reject: none,
            caution: none,
            notice: none,
            rule: none,
            farewell: none,
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
