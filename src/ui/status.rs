//! Loading and load-failed screens.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use super::Palette;

pub fn render_loading(frame: &mut Frame, area: Rect, palette: &Palette) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "WORLDWISE QUIZ",
            Style::default().fg(palette.accent).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Loading questions...",
            Style::default().fg(palette.warning),
        )),
        Line::from(""),
        Line::from("esc cancel  ·  q quit".fg(palette.muted)),
    ];

    render_centered(frame, area, content);
}

pub fn render_failed(frame: &mut Frame, area: Rect, palette: &Palette, reason: &str) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Could not load questions",
            Style::default().fg(palette.wrong).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(reason, Style::default().fg(palette.text))),
        Line::from(""),
        Line::from(""),
        Line::from("enter retry  ·  q quit".fg(palette.muted)),
    ];

    render_centered(frame, area, content);
}

fn render_centered(frame: &mut Frame, area: Rect, content: Vec<Line>) {
    let height = content.len() as u16 + 2;
    let chunks = Layout::vertical([
        Constraint::Percentage(35),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .margin(2)
    .split(area);

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, chunks[1]);
}
