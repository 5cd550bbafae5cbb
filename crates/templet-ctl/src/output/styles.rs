//! Style constants and clap help styling configuration.

use anstyle::{AnsiColor, Color, Effects, Style};

const fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// Green: compiled templates, written files.
pub(crate) const SUCCESS: Style = fg(AnsiColor::Green);

/// Red: errors and failed templates.
pub(crate) const ERROR: Style = fg(AnsiColor::Red);

/// Yellow: warnings, caution messages.
pub(crate) const WARNING: Style = fg(AnsiColor::Yellow);

/// Bold: section headers and label names.
pub(crate) const HEADER: Style = Style::new().effects(Effects::BOLD);
pub(crate) const LABEL: Style = HEADER;

/// Dimmed: hints and secondary information.
pub(crate) const DIM: Style = Style::new().effects(Effects::DIMMED);

/// Help output styling, matching the palette above.
pub(crate) fn clap_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(fg(AnsiColor::Green).effects(Effects::BOLD))
        .usage(fg(AnsiColor::Green).effects(Effects::BOLD))
        .literal(fg(AnsiColor::Cyan))
        .placeholder(fg(AnsiColor::Cyan))
        .error(fg(AnsiColor::Red).effects(Effects::BOLD))
        .valid(fg(AnsiColor::Green))
        .invalid(fg(AnsiColor::Yellow))
}
