//! Connector status styling.
//!
//! Maps connector availability to the colours and labels used by the map and detail view.

use crate::network::ConnectorStatus;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Display style for a connector status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    /// Badge background
    pub bg: Color,
    /// Badge text
    pub fg: Color,
    /// Badge label
    pub label: &'static str,
}

/// Badge style for a connector status. Unrecognized statuses render gray "Unknown".
pub fn connector_style(status: ConnectorStatus) -> StatusStyle {
    match status {
        ConnectorStatus::Available => StatusStyle {
            bg: Color::LightGreen,
            fg: Color::Black,
            label: "Available",
        },
        ConnectorStatus::Charging => StatusStyle {
            bg: Color::LightYellow,
            fg: Color::Black,
            label: "Charging",
        },
        ConnectorStatus::Occupied => StatusStyle {
            bg: Color::LightYellow,
            fg: Color::Black,
            label: "Occupied",
        },
        ConnectorStatus::Unavailable => StatusStyle {
            bg: Color::LightRed,
            fg: Color::Black,
            label: "Unavailable",
        },
        ConnectorStatus::Unknown => StatusStyle {
            bg: Color::Gray,
            fg: Color::Black,
            label: "Unknown",
        },
    }
}

/// Colour of a map marker dot or border.
pub fn dot_color(status: ConnectorStatus) -> Color {
    match status {
        ConnectorStatus::Available => Color::Green,
        ConnectorStatus::Occupied | ConnectorStatus::Charging => Color::Yellow,
        ConnectorStatus::Unavailable => Color::Red,
        ConnectorStatus::Unknown => Color::Gray,
    }
}

/// Badge span for a connector status.
pub fn status_badge(status: ConnectorStatus) -> Span<'static> {
    let style = connector_style(status);
    Span::styled(
        format!(" ⚡ {} ", style.label),
        Style::default()
            .bg(style.bg)
            .fg(style.fg)
            .add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_style_labels() {
        assert_eq!(connector_style(ConnectorStatus::Available).label, "Available");
        assert_eq!(connector_style(ConnectorStatus::Charging).label, "Charging");
        assert_eq!(connector_style(ConnectorStatus::Unavailable).bg, Color::LightRed);
    }

    #[test]
    fn test_unknown_status_is_gray() {
        let style = connector_style(ConnectorStatus::from("faulted"));
        assert_eq!(style.label, "Unknown");
        assert_eq!(style.bg, Color::Gray);
        assert_eq!(dot_color(ConnectorStatus::Unknown), Color::Gray);
    }

    #[test]
    fn test_dot_colors() {
        assert_eq!(dot_color(ConnectorStatus::Available), Color::Green);
        assert_eq!(dot_color(ConnectorStatus::Occupied), Color::Yellow);
        assert_eq!(dot_color(ConnectorStatus::Unavailable), Color::Red);
    }

    #[test]
    fn test_status_badge_text() {
        let badge = status_badge(ConnectorStatus::Occupied);
        assert!(badge.content.contains("Occupied"));
    }
}
