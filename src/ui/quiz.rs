use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::view::{OptionStatus, QuestionView};

use super::Palette;

const OPTION_LABELS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub fn render(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    view: &QuestionView,
    highlighted: usize,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], palette, view);
    render_tally(frame, chunks[1], palette, view);
    render_question_text(frame, chunks[2], palette, &view.prompt);
    render_options(frame, chunks[3], palette, view, highlighted);
    render_navigation(frame, chunks[4], palette, view);
    render_controls(frame, chunks[5], palette);
}

fn render_progress(frame: &mut Frame, area: Rect, palette: &Palette, view: &QuestionView) {
    let meta = [view.category.as_deref(), view.difficulty.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).split(area);

    frame.render_widget(Paragraph::new(meta).fg(palette.muted), halves[0]);
    frame.render_widget(
        Paragraph::new(format!("{}/{}", view.number, view.total))
            .alignment(Alignment::Right)
            .fg(palette.muted),
        halves[1],
    );
}

fn render_tally(frame: &mut Frame, area: Rect, palette: &Palette, view: &QuestionView) {
    let score = &view.score;
    let line = Line::from(vec![
        Span::styled(format!("attempted {}", score.attempted), palette.text),
        Span::styled("  ·  ", palette.muted),
        Span::styled(format!("correct {}", score.correct), palette.correct),
        Span::styled("  ·  ", palette.muted),
        Span::styled(format!("incorrect {}", score.incorrect), palette.wrong),
        Span::styled("  ·  ", palette.muted),
        Span::styled(format!("left {}", score.remaining), palette.text),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, palette: &Palette, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(palette.text)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    view: &QuestionView,
    highlighted: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(view.options.len() * 2);

    for (index, option) in view.options.iter().enumerate() {
        let is_highlighted = option.selectable && index == highlighted;
        let mut style = Style::default().fg(palette.option(option.status));
        if is_highlighted {
            style = style.fg(palette.highlight).bold();
        } else if matches!(
            option.status,
            OptionStatus::Correct | OptionStatus::SelectedWrong
        ) {
            style = style.bold();
        }

        let marker = match option.status {
            _ if is_highlighted => ">",
            OptionStatus::Correct => "+",
            OptionStatus::SelectedWrong => "-",
            OptionStatus::Neutral | OptionStatus::Disabled => " ",
        };
        let label = OPTION_LABELS.get(index).copied().unwrap_or(' ');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(palette.muted),
    );
    frame.render_widget(widget, area);
}

fn render_navigation(frame: &mut Frame, area: Rect, palette: &Palette, view: &QuestionView) {
    let button = |label: &'static str, enabled: bool| {
        if enabled {
            Span::styled(label, Style::default().fg(palette.accent).bold())
        } else {
            Span::styled(label, Style::default().fg(palette.muted))
        }
    };

    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);
    frame.render_widget(
        Paragraph::new(button("< previous", view.previous_enabled)),
        halves[0],
    );
    frame.render_widget(
        Paragraph::new(button("next >", view.next_enabled)).alignment(Alignment::Right),
        halves[1],
    );
}

fn render_controls(frame: &mut Frame, area: Rect, palette: &Palette) {
    let widget = Paragraph::new("j/k choose  ·  enter answer  ·  h/l question  ·  q quit")
        .alignment(Alignment::Center)
        .fg(palette.muted);
    frame.render_widget(widget, area);
}
