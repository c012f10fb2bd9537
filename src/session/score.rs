use crate::models::AnswerRecord;

use super::state::SessionState;

/// Counts derived from the recorded answers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub correct: usize,
    pub incorrect: usize,
    pub attempted: usize,
    pub remaining: usize,
    pub total: usize,
    /// `correct / total * 100`, zero for an empty quiz.
    pub percentage: f64,
}

impl Score {
    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage)
    }
}

/// Band used to colour the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    Good,
    Pass,
    Fail,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        match percentage as u32 {
            90..=u32::MAX => Self::Excellent,
            70..=89 => Self::Good,
            50..=69 => Self::Pass,
            _ => Self::Fail,
        }
    }
}

pub fn score(state: &SessionState) -> Score {
    let total = state.total();
    let mut attempted = 0;
    let mut correct = 0;

    for (answer, question) in state.answers().iter().zip(state.questions()) {
        if let AnswerRecord::AnsweredWith(option) = answer {
            attempted += 1;
            if question.is_correct(option) {
                correct += 1;
            }
        }
    }

    let percentage = if total > 0 {
        (correct as f64 / total as f64) * 100.0
    } else {
        0.0
    };

    Score {
        correct,
        incorrect: attempted - correct,
        attempted,
        remaining: total - attempted,
        total,
        percentage,
    }
}
