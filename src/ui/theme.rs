use ratatui::style::Color;

use crate::config::Theme;
use crate::session::Grade;
use crate::view::OptionStatus;

/// Colours handed to every screen. Picked once from the configured theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub highlight: Color,
    pub correct: Color,
    pub wrong: Color,
    pub warning: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                accent: Color::Cyan,
                text: Color::White,
                muted: Color::DarkGray,
                highlight: Color::Yellow,
                correct: Color::Green,
                wrong: Color::Red,
                warning: Color::Yellow,
            },
            Theme::Light => Self {
                accent: Color::Blue,
                text: Color::Black,
                muted: Color::Gray,
                highlight: Color::Magenta,
                correct: Color::Green,
                wrong: Color::Red,
                warning: Color::LightRed,
            },
        }
    }

    pub fn option(&self, status: OptionStatus) -> Color {
        match status {
            OptionStatus::Neutral => self.text,
            OptionStatus::Correct => self.correct,
            OptionStatus::SelectedWrong => self.wrong,
            OptionStatus::Disabled => self.muted,
        }
    }

    pub fn grade(&self, grade: Grade) -> Color {
        match grade {
            Grade::Excellent => self.correct,
            Grade::Good => self.accent,
            Grade::Pass => self.warning,
            Grade::Fail => self.wrong,
        }
    }
}
