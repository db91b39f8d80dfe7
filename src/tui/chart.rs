use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::format::format_amount;
use crate::SpesaConfig;

const PALETTE: [Color; 4] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];

/// Renders the category breakdown as a horizontal bar chart, one bar per
/// category, proportional to the summed amounts.
pub fn render_categories(
    frame: &mut Frame,
    area: Rect,
    categories: &[(String, Decimal)],
    config: &SpesaConfig,
) {
    let block = Block::default().borders(Borders::ALL).title("Categories");
    if categories.is_empty() {
        frame.render_widget(Paragraph::new("No expenses yet").block(block), area);
        return;
    }

    let bars: Vec<Bar> = categories
        .iter()
        .enumerate()
        .map(|(i, (label, total))| {
            let cents = (*total * Decimal::ONE_HUNDRED).to_u64().unwrap_or(0);
            Bar::default()
                .value(cents)
                .text_value(format_amount(*total, config))
                .label(Line::from(label.as_str()))
                .style(Style::default().fg(PALETTE[i % PALETTE.len()]))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}
