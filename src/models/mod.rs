mod answer;
mod question;
mod shuffle;

pub use answer::AnswerRecord;
pub use question::{Question, QuestionSet};
pub use shuffle::shuffle_options;
