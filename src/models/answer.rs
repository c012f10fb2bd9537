/// What the user did with one question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnswerRecord {
    #[default]
    Unanswered,
    AnsweredWith(String),
}

impl AnswerRecord {
    pub fn is_answered(&self) -> bool {
        matches!(self, Self::AnsweredWith(_))
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            Self::Unanswered => None,
            Self::AnsweredWith(option) => Some(option),
        }
    }
}
