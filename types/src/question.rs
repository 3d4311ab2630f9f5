use std::fmt::Display;

use crate::movie::Movie;

/// Ratings strictly above this make "yes" the right answer.
pub const RATING_THRESHOLD: f32 = 7.0;

pub const QUESTION_TEXT: &str = "Is the rating of this movie greater than 7?";

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub image: Vec<u8>,
    pub text: String,
    pub correct_answer: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Answer {
    Yes,
    No,
}

impl Question {
    pub fn for_movie(movie: &Movie, image: Vec<u8>) -> Self {
        Self {
            image,
            text: QUESTION_TEXT.to_string(),
            correct_answer: movie.rating_value() > RATING_THRESHOLD,
        }
    }

    pub fn is_correct(&self, answer: Answer) -> bool {
        bool::from(answer) == self.correct_answer
    }
}

impl Answer {
    pub const ALL: [Answer; 2] = [Answer::Yes, Answer::No];
}

impl From<Answer> for bool {
    fn from(value: Answer) -> Self {
        matches!(value, Answer::Yes)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value {
            Answer::Yes
        } else {
            Answer::No
        }
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Yes => write!(f, "Yes"),
            Answer::No => write!(f, "No"),
        }
    }
}
