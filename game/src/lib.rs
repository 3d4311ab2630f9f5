pub mod config;
pub mod error;
pub mod events;
pub mod frontend;
pub mod question_factory;
pub mod round;
pub mod session;
pub mod timer;

use std::time::Duration;

use statistics::{KeyValueStore, StatisticService};
use types::Strategy;

pub use config::QuizConfig;
pub use error::QuizError;
pub use events::EventBus;
pub use frontend::run_player;
pub use question_factory::QuestionFactory;
pub use round::{Advance, QuestionTicket, Round};
pub use session::Session;
pub use timer::FeedbackTimer;

/// Plays rounds with `strategy` until it quits or `max_rounds` results have
/// been shown. Returns the statistics and the number of finished rounds.
pub async fn run_quiz<S: KeyValueStore>(
    statistics: StatisticService<S>,
    factory: QuestionFactory,
    mut strategy: Box<dyn Strategy>,
    feedback_delay: Duration,
    max_rounds: Option<usize>,
) -> Result<(StatisticService<S>, usize), QuizError> {
    let (mut session, commands) = Session::new(Round::new(statistics), factory, feedback_delay);
    let events = session.subscribe();

    let player = tokio::task::spawn_blocking(move || {
        run_player(strategy.as_mut(), events, commands, max_rounds)
    });
    let statistics = session.run().await;
    let rounds_played = player.await?;

    log::info!("Played {rounds_played} rounds");
    Ok((statistics, rounds_played))
}
