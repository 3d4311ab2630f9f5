use statistics::{KeyValueStore, StatisticService};
use tokio::sync::mpsc::UnboundedReceiver;
use types::{
    AlertModel, Answer, Question, QuizEvent, QuizResults, QuizStep, RoundPhase, QUESTIONS_AMOUNT,
};
use uuid::Uuid;

use crate::{EventBus, QuizError};

/// Tags a question request with the round and step it was made for, so a
/// late answer from an earlier request can be recognised and dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuestionTicket {
    pub round_id: Uuid,
    pub question_index: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Advance {
    NextQuestion(QuestionTicket),
    Finished(QuizResults),
    /// Called outside of feedback; nothing happened.
    Ignored,
}

/// The round state machine: question → answer → feedback → next or finish.
#[derive(Debug)]
pub struct Round<S: KeyValueStore> {
    round_id: Uuid,
    question_index: usize,
    correct_answers: usize,
    current_question: Option<Question>,
    phase: RoundPhase,
    statistics: StatisticService<S>,
    events: EventBus,
}

impl<S: KeyValueStore> Round<S> {
    pub fn new(statistics: StatisticService<S>) -> Self {
        Self {
            round_id: Uuid::new_v4(),
            question_index: 0,
            correct_answers: 0,
            current_question: None,
            phase: RoundPhase::Loading,
            statistics,
            events: EventBus::new(),
        }
    }

    pub fn subscribe(&mut self) -> UnboundedReceiver<QuizEvent> {
        self.events.subscribe()
    }

    pub(crate) fn emit(&mut self, event: QuizEvent) {
        self.events.emit(event);
    }

    pub fn round_id(&self) -> Uuid {
        self.round_id
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    pub fn statistics(&self) -> &StatisticService<S> {
        &self.statistics
    }

    pub fn into_statistics(self) -> StatisticService<S> {
        self.statistics
    }

    fn is_last_question(&self) -> bool {
        self.question_index + 1 == QUESTIONS_AMOUNT
    }

    fn ticket(&self) -> QuestionTicket {
        QuestionTicket {
            round_id: self.round_id,
            question_index: self.question_index,
        }
    }

    /// Starts waiting for the question at the current index.
    pub fn request_question(&mut self) -> QuestionTicket {
        self.phase = RoundPhase::Loading;
        self.current_question = None;
        self.ticket()
    }

    fn is_current(&self, ticket: &QuestionTicket) -> bool {
        *ticket == self.ticket() && self.phase == RoundPhase::Loading
    }

    pub fn on_question_ready(&mut self, ticket: QuestionTicket, question: Question) -> bool {
        if !self.is_current(&ticket) {
            log::warn!(
                "Dropping stale question for {ticket:?}; round {} is at {} in phase {}",
                self.round_id,
                self.question_index,
                self.phase
            );
            return false;
        }
        let step = QuizStep::from_question(&question, self.question_index, QUESTIONS_AMOUNT);
        log::debug!("Showing question {}", step.question_number);
        self.current_question = Some(question);
        self.phase = RoundPhase::AwaitingAnswer;
        self.emit(QuizEvent::QuestionShown(step));
        true
    }

    pub fn on_question_failed(&mut self, ticket: QuestionTicket, error: QuizError) -> bool {
        if !self.is_current(&ticket) {
            log::warn!("Dropping stale failure for {ticket:?}: {error}");
            return false;
        }
        self.fail(error);
        true
    }

    pub fn on_catalog_failed(&mut self, error: QuizError) {
        self.fail(error);
    }

    /// Enters `Failed` and tells the presentation, offering a retry.
    pub fn fail(&mut self, error: QuizError) {
        self.phase = RoundPhase::Failed;
        self.report_error(error);
    }

    /// Shows the error alert without leaving the current phase.
    pub fn report_error(&mut self, error: QuizError) {
        log::error!("Round {} in phase {}: {error}", self.round_id, self.phase);
        self.emit(QuizEvent::Error(AlertModel {
            title: "Error".to_string(),
            message: error.to_string(),
            button_text: "Try again".to_string(),
        }));
    }

    /// Checks the answer against the current question. Returns `None` without
    /// touching anything unless a question is waiting for an answer.
    pub fn submit_answer(&mut self, answer: Answer) -> Option<bool> {
        if self.phase != RoundPhase::AwaitingAnswer {
            log::debug!("Ignoring answer {answer} in phase {}", self.phase);
            return None;
        }
        let is_correct = self.current_question.as_ref()?.is_correct(answer);
        if is_correct {
            self.correct_answers += 1;
        }
        self.phase = RoundPhase::Feedback;
        log::info!(
            "Question {}/{}: answered {answer}, {}",
            self.question_index + 1,
            QUESTIONS_AMOUNT,
            if is_correct { "correct" } else { "wrong" }
        );
        self.emit(QuizEvent::AnswerChecked { is_correct });
        Some(is_correct)
    }

    /// Moves past the feedback pause: either to the next question or, after
    /// the last one, records the round and reports the results.
    pub async fn advance(&mut self) -> Result<Advance, QuizError> {
        if self.phase != RoundPhase::Feedback {
            log::debug!("Ignoring advance in phase {}", self.phase);
            return Ok(Advance::Ignored);
        }
        if !self.is_last_question() {
            self.question_index += 1;
            return Ok(Advance::NextQuestion(self.request_question()));
        }

        self.phase = RoundPhase::Finished;
        self.current_question = None;
        let correct = self.correct_answers as u32;
        self.statistics
            .store(correct, QUESTIONS_AMOUNT as u32)
            .await?;
        let results = self.results().await?;
        log::info!(
            "Round {} finished: {correct}/{QUESTIONS_AMOUNT}",
            self.round_id
        );
        self.emit(QuizEvent::RoundFinished(results.clone()));
        Ok(Advance::Finished(results))
    }

    async fn results(&self) -> Result<QuizResults, QuizError> {
        let games_count = self.statistics.games_count().await?;
        let best_game = self.statistics.best_game().await?;
        let accuracy = self.statistics.total_accuracy().await?;
        let text = [
            format!("Your result: {}/{}", self.correct_answers, QUESTIONS_AMOUNT),
            format!("Quizzes played: {games_count}"),
            format!("Record: {best_game}"),
            format!("Average accuracy: {accuracy:.2}%"),
        ]
        .join("\n");
        Ok(QuizResults {
            title: "This round is over!".to_string(),
            text,
            button_text: "Play again".to_string(),
        })
    }

    /// Throws away all progress and starts a fresh round from question one.
    pub fn restart(&mut self) -> QuestionTicket {
        self.round_id = Uuid::new_v4();
        self.question_index = 0;
        self.correct_answers = 0;
        log::info!("Starting round {}", self.round_id);
        self.request_question()
    }
}
