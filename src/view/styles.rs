//! Table styling configuration.
//!
//! Colors for the header, the selection, the failure banner and dialogs.
//! Everything degrades to unstyled text when colors are disabled.

use ratatui::style::{Color, Modifier, Style};

/// Style for secondary text (hints, placeholders).
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Style for section headers in overlays.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag (or `no_color` in the config file)
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TableStyles =====

/// Styles used by the table view.
///
/// Modifiers (bold, reversed) survive when colors are disabled so the
/// selection stays visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyles {
    pub title: Style,
    pub header: Style,
    pub sorted_header: Style,
    pub selected_row: Style,
    pub selected_cell: Style,
    pub error_banner: Style,
    pub dialog_border: Style,
    pub label: Style,
    pub section: Style,
    pub muted: Style,
}

impl TableStyles {
    /// Create styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let reversed = Style::default().add_modifier(Modifier::REVERSED);

        if config.colors_enabled() {
            Self {
                title: bold.fg(Color::Cyan),
                header: bold,
                sorted_header: bold.fg(Color::Yellow),
                selected_row: Style::default().bg(Color::DarkGray),
                selected_cell: reversed,
                error_banner: bold.fg(Color::White).bg(Color::Red),
                dialog_border: Style::default().fg(Color::Cyan),
                label: bold.fg(Color::Yellow),
                section: SECTION_HEADER,
                muted: MUTED_TEXT,
            }
        } else {
            Self {
                title: bold,
                header: bold,
                sorted_header: bold.add_modifier(Modifier::UNDERLINED),
                selected_row: Style::default(),
                selected_cell: reversed,
                error_banner: bold,
                dialog_border: Style::default(),
                label: bold,
                section: bold,
                muted: Style::default(),
            }
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
