use std::fmt::Debug;

use crate::{AlertModel, Answer, QuizStep};

/// Somebody answering questions: a person at the terminal or a bot.
pub trait Strategy: Debug + Send {
    /// `None` means the player has left.
    fn select_answer(&mut self, step: &QuizStep, available_answers: &[Answer]) -> Option<Answer>;

    /// Whether to press the alert's only button. Declining ends the session.
    fn acknowledge(&mut self, alert: &AlertModel) -> bool;
}
