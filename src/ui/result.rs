use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::view::{OptionStatus, ReviewView};

use super::Palette;

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, view: &ReviewView, scroll: usize) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], palette, view);
    render_review(frame, chunks[2], palette, view, scroll);
    render_controls(frame, chunks[3], palette);
}

fn render_score_summary(frame: &mut Frame, area: Rect, palette: &Palette, view: &ReviewView) {
    let score = &view.score;
    let grade_color = palette.grade(score.grade());

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ COMPLETED",
            Style::default().fg(palette.accent).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({:.1}%)", score.correct, score.total, score.percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(vec![
            Span::styled(format!("correct {}", score.correct), palette.correct),
            Span::styled("  ·  ", palette.muted),
            Span::styled(format!("incorrect {}", score.incorrect), palette.wrong),
        ]),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.muted),
    );
    frame.render_widget(widget, area);
}

fn render_review(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    view: &ReviewView,
    scroll: usize,
) {
    let mut lines: Vec<Line> = Vec::new();

    for item in &view.items {
        let (symbol, color) = if item.is_correct {
            ("+", palette.correct)
        } else {
            ("-", palette.wrong)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(format!("{:2}. ", item.number), palette.muted),
            Span::styled(item.prompt.as_str(), Style::default().fg(palette.text).bold()),
        ]));

        for option in &item.options {
            let style = match option.status {
                OptionStatus::Correct | OptionStatus::SelectedWrong => {
                    Style::default().fg(palette.option(option.status)).bold()
                }
                OptionStatus::Neutral | OptionStatus::Disabled => Style::default().fg(palette.muted),
            };
            lines.push(Line::from(Span::styled(
                format!("       {}", option.text),
                style,
            )));
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, palette: &Palette) {
    let widget = Paragraph::new("j/k scroll  ·  r new quiz  ·  q quit")
        .alignment(Alignment::Center)
        .fg(palette.muted);
    frame.render_widget(widget, area);
}
