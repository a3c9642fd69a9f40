//! Station detail view rendering.
//!
//! Shows the selected station's connectors, operator information, an energy
//! chart placeholder and tariff details.

use crate::app::{App, ChartPeriod};
use crate::network::Station;
use crate::network::models::StationStatus;
use crate::ui::layout::{back_button_area, split_detail_view};
use crate::ui::status::status_badge;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph, Widget, Wrap},
};

/// Number of bars drawn by the energy chart.
pub const CHART_BARS: usize = 20;

/// Deterministic placeholder bar heights for the energy chart.
///
/// # Arguments
/// * `station_id` - Station shown in the detail view
/// * `period` - Selected chart period
///
/// # Returns
/// * `Vec<u64>` - `CHART_BARS` heights in `20..170`
pub fn chart_bars(station_id: u32, period: ChartPeriod) -> Vec<u64> {
    let period_index = ChartPeriod::ALL
        .iter()
        .position(|p| *p == period)
        .unwrap_or(0) as u64;
    let mut state = ((station_id as u64) << 8) | period_index;
    (0..CHART_BARS)
        .map(|_| {
            // xorshift64* step
            state ^= state >> 12;
            state ^= state << 25;
            state ^= state >> 27;
            state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            20 + state.wrapping_mul(0x2545_F491_4F6C_DD1D) % 150
        })
        .collect()
}

/// Render the station detail view.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
pub fn render_detail(app: &App, area: Rect, buf: &mut Buffer) {
    let station = app.detail_station();
    let (header, [left, center, right]) = split_detail_view(area);

    render_header(station, header, buf);
    render_left_column(station, left, buf);
    render_chart(station, app.chart_period, center, buf);
    render_right_column(station, right, buf);
}

fn render_header(station: &Station, area: Rect, buf: &mut Buffer) {
    let back = back_button_area(area);
    let back_button = Paragraph::new(Line::from(Span::styled(
        "← Back",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL));
    Widget::render(back_button, back, buf);

    let (status_text, status_bg) = match station.status {
        StationStatus::Online => ("Free, available", Color::Green),
        StationStatus::Offline => ("Unavailable", Color::DarkGray),
    };

    let rest = Rect {
        x: back.right(),
        width: area.width.saturating_sub(back.width),
        ..area
    };
    let line = Line::from(vec![
        Span::styled(
            station.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(station.address.as_str(), Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", status_text),
            Style::default().fg(Color::White).bg(status_bg),
        ),
        Span::styled(
            format!("  #{}", station.serial),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    Widget::render(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        rest,
        buf,
    );
}

/// Two-column label/value line.
fn info_line<'a>(label: &'a str, value: impl Into<String>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value.into(), Style::default().add_modifier(Modifier::BOLD)),
    ])
}

fn render_left_column(station: &Station, area: Rect, buf: &mut Buffer) {
    let connectors = station
        .map
        .as_ref()
        .map(|m| m.connectors.as_slice())
        .unwrap_or_default();
    let connector_height = (connectors.len() as u16 * 3).max(1) + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(connector_height),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(area);

    let mut lines = Vec::new();
    for connector in connectors {
        lines.push(Line::from(Span::styled(
            connector.plug.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("{} kW • CABLE • ID {}", connector.power_kw, connector.cable_id),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(status_badge(connector.status)));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No connector data",
            Style::default().fg(Color::Gray),
        )));
    }
    Widget::render(
        Paragraph::new(lines).block(Block::default().title("Connectors").borders(Borders::ALL)),
        chunks[0],
        buf,
    );

    let about = vec![
        info_line("In-app alert", "—"),
        info_line("Public description", "—"),
        info_line("Owner", "Unified EV operator"),
        info_line("Max % paid with points", "10"),
        info_line("Discounts", "—"),
        info_line("Opening hours", "24/7"),
    ];
    Widget::render(
        Paragraph::new(about)
            .wrap(Wrap { trim: true })
            .block(Block::default().title("About").borders(Borders::ALL)),
        chunks[1],
        buf,
    );

    let technical = vec![
        info_line("Last contact", "22-07-2025 11:17:53 (StatusNotification)"),
        info_line("Vendor", "E-prom / Prom Energo (Einnovation)"),
        info_line("Model", "—"),
        info_line("Serial number", station.serial.as_str()),
        info_line("Network", format!("{} ({})", station.ip, station.ssh)),
        info_line("Description", "Partner"),
    ];
    Widget::render(
        Paragraph::new(technical)
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Technical").borders(Borders::ALL)),
        chunks[2],
        buf,
    );
}

fn render_chart(station: &Station, period: ChartPeriod, area: Rect, buf: &mut Buffer) {
    let bars = chart_bars(station.id, period);
    let total: u64 = bars.iter().sum();

    let block = Block::default()
        .title("Charged, kWh ('p' to change period)")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    Widget::render(block, area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let mut selector: Vec<Span> = ChartPeriod::ALL
        .iter()
        .flat_map(|p| {
            let style = if *p == period {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            [Span::styled(format!(" {} ", p.label()), style), Span::raw(" ")]
        })
        .collect();
    selector.push(Span::styled(
        format!("  {} kWh", total),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    Widget::render(Paragraph::new(Line::from(selector)), chunks[0], buf);

    let data: Vec<(&str, u64)> = bars.iter().map(|h| ("", *h)).collect();
    let chart = BarChart::default()
        .data(data.as_slice())
        .bar_width(1)
        .bar_gap(1)
        .max(170)
        .bar_style(Style::default().fg(Color::Green));
    Widget::render(chart, chunks[1], buf);
}

fn render_right_column(station: &Station, area: Rect, buf: &mut Buffer) {
    let power = station
        .map
        .as_ref()
        .map(|m| format!("{} kW • {:?}", m.rated_power_kw, m.current))
        .unwrap_or_else(|| "—".to_string());

    let lines = vec![
        info_line("Tariff", "Charge - 21 ₽/kWh"),
        info_line("Power", power),
        info_line("Address", format!("{}, {}", station.address, station.city)),
        info_line("Coordinates", station.format_coordinates()),
    ];
    Widget::render(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Station").borders(Borders::ALL)),
        area,
        buf,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_bars_are_deterministic() {
        let first = chart_bars(3, ChartPeriod::Quarter);
        assert_eq!(first, chart_bars(3, ChartPeriod::Quarter));
        assert_eq!(first.len(), CHART_BARS);
    }

    #[test]
    fn test_chart_bars_in_range() {
        for period in ChartPeriod::ALL {
            for station_id in 1..=5 {
                assert!(
                    chart_bars(station_id, period)
                        .iter()
                        .all(|h| (20..170).contains(h))
                );
            }
        }
    }

    #[test]
    fn test_chart_bars_vary_by_period() {
        assert_ne!(
            chart_bars(1, ChartPeriod::Quarter),
            chart_bars(1, ChartPeriod::Year)
        );
    }
}
