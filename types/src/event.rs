use std::fmt::Display;

use crate::{AlertModel, Answer, QuizResults, QuizStep};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for the catalog or the next question.
    Loading,
    AwaitingAnswer,
    Feedback,
    Finished,
    Failed,
}

/// Everything the core tells the presentation.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizEvent {
    Loading(bool),
    QuestionShown(QuizStep),
    AnswerChecked { is_correct: bool },
    RoundFinished(QuizResults),
    Error(AlertModel),
}

/// Everything the presentation can ask of the core.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UserCommand {
    Answer(Answer),
    Restart,
    Quit,
}

impl Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundPhase::Loading => write!(f, "Loading"),
            RoundPhase::AwaitingAnswer => write!(f, "AwaitingAnswer"),
            RoundPhase::Feedback => write!(f, "Feedback"),
            RoundPhase::Finished => write!(f, "Finished"),
            RoundPhase::Failed => write!(f, "Failed"),
        }
    }
}
