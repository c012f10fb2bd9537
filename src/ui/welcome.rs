use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::Palette;

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, question_count: usize) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "WORLDWISE QUIZ",
            Style::default().fg(palette.accent).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Questions · Multiple Choice", question_count),
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(palette.correct).bold(),
        )),
        Line::from("to start  ·  q to quit".fg(palette.muted)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.muted),
    );

    frame.render_widget(widget, chunks[1]);
}
