use rand::Rng;

use crate::error::SourceError;

use super::shuffle::shuffle_options;

/// A single multiple-choice question.
///
/// Options are shuffled exactly once, when the question is built, and keep
/// that order for as long as the question lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
    category: Option<String>,
    difficulty: Option<String>,
}

impl Question {
    /// Build a question from already-decoded text, shuffling the correct
    /// answer in among the incorrect ones.
    pub fn new<R: Rng + ?Sized>(
        prompt: String,
        correct_answer: String,
        incorrect_answers: Vec<String>,
        rng: &mut R,
    ) -> Result<Self, SourceError> {
        if prompt.trim().is_empty() {
            return Err(SourceError::malformed("question has an empty prompt"));
        }
        if incorrect_answers.is_empty() {
            return Err(SourceError::malformed(format!(
                "question {:?} has no incorrect answers",
                prompt
            )));
        }

        let mut options = incorrect_answers;
        options.push(correct_answer.clone());

        Ok(Self {
            prompt,
            options: shuffle_options(options, rng),
            correct_answer,
            category: None,
            difficulty: None,
        })
    }

    pub fn with_metadata(mut self, category: Option<String>, difficulty: Option<String>) -> Self {
        self.category = category;
        self.difficulty = difficulty;
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }

    pub fn offers(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }
}

/// The ordered questions of one session. Its size never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_correct_answer_injected_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let question = Question::new(
            "Capital of Peru?".to_string(),
            "Lima".to_string(),
            strings(&["Quito", "Bogota", "La Paz"]),
            &mut rng,
        )
        .unwrap();

        assert_eq!(question.options().len(), 4);
        let hits = question.options().iter().filter(|o| *o == "Lima").count();
        assert_eq!(hits, 1);
        assert!(question.offers("Quito"));
        assert!(!question.offers("Santiago"));
        assert!(question.is_correct("Lima"));
    }

    #[test]
    fn test_rejects_question_without_distractors() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = Question::new("Q?".to_string(), "A".to_string(), Vec::new(), &mut rng);
        assert!(matches!(result, Err(SourceError::Malformed(_))));
    }

    #[test]
    fn test_rejects_blank_prompt() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = Question::new(" ".to_string(), "A".to_string(), strings(&["B"]), &mut rng);
        assert!(result.is_err());
    }

    #[test]
    fn test_option_order_is_fixed_after_construction() {
        let mut rng = StdRng::seed_from_u64(99);
        let question = Question::new(
            "Q?".to_string(),
            "A".to_string(),
            strings(&["B", "C", "D"]),
            &mut rng,
        )
        .unwrap();

        let first: Vec<String> = question.options().to_vec();
        let cloned = question.clone();
        assert_eq!(cloned.options(), first.as_slice());
        assert_eq!(question.options(), first.as_slice());
    }
}
