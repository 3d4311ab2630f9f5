use std::time::Duration;

use catalog::CatalogError;
use statistics::{KeyValueStore, StatisticService};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use types::{Movie, Question, QuizEvent, UserCommand};

use crate::{
    question_factory::{load_catalog, make_question},
    Advance, FeedbackTimer, QuestionFactory, QuestionTicket, Round,
};

/// Results of work spawned off the session task.
#[derive(Debug)]
enum Completion {
    CatalogLoaded {
        generation: u64,
        result: Result<Vec<Movie>, CatalogError>,
    },
    QuestionLoaded {
        ticket: QuestionTicket,
        question: Question,
    },
}

enum Wake {
    Command(Option<UserCommand>),
    Completion(Completion),
    FeedbackElapsed,
}

/// Drives one player's quiz: owns the round, the catalog and the feedback
/// timer, and is the only place any of them change.
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    round: Round<S>,
    factory: QuestionFactory,
    timer: FeedbackTimer,
    commands: UnboundedReceiver<UserCommand>,
    completions_tx: UnboundedSender<Completion>,
    completions: UnboundedReceiver<Completion>,
    load_generation: u64,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(
        round: Round<S>,
        factory: QuestionFactory,
        feedback_delay: Duration,
    ) -> (Self, UnboundedSender<UserCommand>) {
        let (commands_tx, commands) = unbounded_channel();
        let (completions_tx, completions) = unbounded_channel();
        let session = Self {
            round,
            factory,
            timer: FeedbackTimer::new(feedback_delay),
            commands,
            completions_tx,
            completions,
            load_generation: 0,
        };
        (session, commands_tx)
    }

    pub fn subscribe(&mut self) -> UnboundedReceiver<QuizEvent> {
        self.round.subscribe()
    }

    /// Runs until `Quit` or until every command sender is dropped, then hands
    /// back the statistics.
    pub async fn run(mut self) -> StatisticService<S> {
        log::info!("Session started, round {}", self.round.round_id());
        self.start_catalog_load();

        loop {
            let wake = tokio::select! {
                command = self.commands.recv() => Wake::Command(command),
                Some(completion) = self.completions.recv() => Wake::Completion(completion),
                _ = self.timer.fired() => Wake::FeedbackElapsed,
            };

            match wake {
                Wake::Command(None) | Wake::Command(Some(UserCommand::Quit)) => break,
                Wake::Command(Some(command)) => self.on_command(command),
                Wake::Completion(completion) => self.on_completion(completion),
                Wake::FeedbackElapsed => self.on_feedback_elapsed().await,
            }
        }

        log::info!("Session ended in phase {}", self.round.phase());
        self.round.into_statistics()
    }

    fn on_command(&mut self, command: UserCommand) {
        match command {
            UserCommand::Answer(answer) => {
                if self.round.submit_answer(answer).is_some() {
                    self.timer.schedule();
                }
            }
            UserCommand::Restart => {
                self.timer.cancel();
                let ticket = self.round.restart();
                if self.factory.is_empty() {
                    self.start_catalog_load();
                } else {
                    self.start_question(ticket);
                }
            }
            UserCommand::Quit => {}
        }
    }

    fn on_completion(&mut self, completion: Completion) {
        match completion {
            Completion::CatalogLoaded { generation, result } => {
                if generation != self.load_generation {
                    log::warn!(
                        "Dropping catalog load {generation}, expecting {}",
                        self.load_generation
                    );
                    return;
                }
                self.round.emit(QuizEvent::Loading(false));
                match result {
                    Ok(movies) => {
                        self.factory.replace_catalog(movies);
                        let ticket = self.round.request_question();
                        self.start_question(ticket);
                    }
                    Err(err) => self.round.on_catalog_failed(err.into()),
                }
            }
            Completion::QuestionLoaded { ticket, question } => {
                self.round.on_question_ready(ticket, question);
            }
        }
    }

    async fn on_feedback_elapsed(&mut self) {
        match self.round.advance().await {
            Ok(Advance::NextQuestion(ticket)) => self.start_question(ticket),
            Ok(Advance::Finished(results)) => {
                log::debug!("Results:\n{}", results.text);
            }
            Ok(Advance::Ignored) => {}
            // the round stays finished; the player can still restart
            Err(err) => self.round.report_error(err),
        }
    }

    fn start_catalog_load(&mut self) {
        self.load_generation += 1;
        let generation = self.load_generation;
        let loader = self.factory.movies_loader();
        let tx = self.completions_tx.clone();
        self.round.emit(QuizEvent::Loading(true));
        log::info!("Loading catalog (load {generation})");

        tokio::spawn(async move {
            let result = load_catalog(loader.as_ref()).await;
            let _ = tx.send(Completion::CatalogLoaded { generation, result });
        });
    }

    fn start_question(&mut self, ticket: QuestionTicket) {
        let movie = match self.factory.pick_movie() {
            Ok(movie) => movie,
            Err(err) => {
                self.round.on_question_failed(ticket, err);
                return;
            }
        };
        let image_loader = self.factory.image_loader();
        let tx = self.completions_tx.clone();

        tokio::spawn(async move {
            let question = make_question(&movie, image_loader.as_ref()).await;
            let _ = tx.send(Completion::QuestionLoaded { ticket, question });
        });
    }
}
