use std::fmt::Display;

use crate::question::Question;

/// One question as the presentation shows it.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizStep {
    pub image: Vec<u8>,
    pub question: String,
    pub question_number: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizResults {
    pub title: String,
    pub text: String,
    pub button_text: String,
}

/// Modal dialog with a single button.
#[derive(Clone, Debug, PartialEq)]
pub struct AlertModel {
    pub title: String,
    pub message: String,
    pub button_text: String,
}

impl QuizStep {
    /// `index` is zero-based; the label is one-based.
    pub fn from_question(question: &Question, index: usize, total: usize) -> Self {
        Self {
            image: question.image.clone(),
            question: question.text.clone(),
            question_number: format!("{}/{}", index + 1, total),
        }
    }
}

impl From<&QuizResults> for AlertModel {
    fn from(value: &QuizResults) -> Self {
        Self {
            title: value.title.clone(),
            message: value.text.clone(),
            button_text: value.button_text.clone(),
        }
    }
}

impl Display for QuizStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let image = if self.image.is_empty() {
            "no poster".to_string()
        } else {
            format!("poster, {} bytes", self.image.len())
        };
        write!(f, "[{}] {} ({image})", self.question_number, self.question)
    }
}

impl Display for AlertModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Movie;

    #[test]
    fn test_question_number_is_one_based() {
        let question = Question::for_movie(&Movie::new("M", "8.0", ""), vec![1, 2, 3]);
        let step = QuizStep::from_question(&question, 0, 10);
        assert_eq!(step.question_number, "1/10");
        assert_eq!(step.image, vec![1, 2, 3]);

        let last = QuizStep::from_question(&question, 9, 10);
        assert_eq!(last.question_number, "10/10");
    }
}
