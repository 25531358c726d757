//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    // Accent colors
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const RED: Color = Color::Rgb(224, 108, 117);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);

    // Shared cursor style (used by every text input)
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Panel header (icon, title, saved filter, create action)
pub mod header {
    use super::*;

    pub const BORDER: Color = palette::PURPLE;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const ICON: Color = palette::PINK;
    pub const SAVED_FILTER: Color = palette::CYAN;
    pub const ACTION_ENABLED: Color = palette::GREEN;
    pub const ACTION_DISABLED: Color = palette::TEXT_DIM;
}

/// Search body controls
pub mod panel {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const LABEL: Color = palette::TEXT_MUTED;
    pub const INPUT_TEXT: Color = palette::TEXT;
    pub const PROMPT: Color = palette::TEXT_DIM;
    pub const OPERATOR: Color = palette::YELLOW;
    pub const BUTTON: Color = palette::CYAN;
    pub const LINK: Color = palette::PURPLE;
    pub const OPTION_CHECKED: Color = palette::GREEN;
    pub const OPTION_UNCHECKED: Color = palette::TEXT_MUTED;
    pub const FOCUSED_BG: Color = palette::BG_HIGHLIGHT;
    pub const FOCUSED_MODIFIER: Modifier = Modifier::BOLD;
}

/// Dispatched search request log
pub mod requests {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const LATEST: Color = palette::TEXT;
    pub const OLDER: Color = palette::TEXT_MUTED;
    pub const NAVIGATION: Color = palette::PINK;
    pub const EMPTY: Color = palette::TEXT_DIM;
}

/// Saved filter popup
pub mod saved_filter {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const ITEM_NORMAL_FG: Color = palette::TEXT;
    pub const ITEM_SELECTED_FG: Color = palette::BG_DARK;
    pub const ITEM_SELECTED_BG: Color = palette::CYAN;
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(55, 55, 85),
        border: Color::Rgb(130, 133, 158),
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(255, 217, 61),
        border: Color::Rgb(255, 217, 61),
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(224, 108, 117),
        border: Color::Rgb(255, 135, 145),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}
