//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::view::common::ColorTag;

/// Color palette.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    // Availability badges
    pub const IN_STOCK: Color = Color::Rgb(0x5c, 0xb8, 0x5c);
    pub const LESS_THAN_10: Color = Color::Rgb(0xf0, 0xad, 0x4e);
    pub const OUT_OF_STOCK: Color = Color::Rgb(0xd9, 0x53, 0x4f);
    pub const BADGE_FG: Color = Color::Black;

    // Tab colors
    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::Gray;

    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Active tab style.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab style.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Error text (fetch failures).
    pub fn error() -> Style {
        Style::default()
            .fg(Theme::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Status messages.
    pub fn warning() -> Style {
        Style::default().fg(Theme::WARNING)
    }

    /// Filter input style.
    pub fn filter_input() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Maps a UI-agnostic [`ColorTag`] to a badge style.
    pub fn from_tag(tag: ColorTag) -> Style {
        let bg = match tag {
            ColorTag::Green => Theme::IN_STOCK,
            ColorTag::Amber => Theme::LESS_THAN_10,
            ColorTag::Red => Theme::OUT_OF_STOCK,
        };
        Style::default().fg(Theme::BADGE_FG).bg(bg)
    }
}
