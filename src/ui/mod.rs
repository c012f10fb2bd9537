mod quiz;
mod result;
mod status;
mod theme;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::view::{ViewModel, project};

pub use theme::Palette;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.palette();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match project(app.session().state()) {
        ViewModel::Welcome => welcome::render(frame, area, palette, app.question_count()),
        ViewModel::Loading => status::render_loading(frame, area, palette),
        ViewModel::Failed { reason } => status::render_failed(frame, area, palette, &reason),
        ViewModel::Question(view) => quiz::render(frame, area, palette, &view, app.highlighted()),
        ViewModel::Review(view) => {
            result::render(frame, area, palette, &view, app.result_scroll())
        }
    }
}
