use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use catalog::{CatalogError, MoviesLoader, NoopImageLoader, StaticMoviesLoader};
use game::{run_quiz, QuestionFactory, Round, Session};
use statistics::{MemoryStore, StatisticService};
use strategies::{DefaultStrategy, RandomStrategy};
use tokio::sync::mpsc::UnboundedReceiver;
use types::{Answer, Movie, MostPopularMovies, QuizEvent, UserCommand, QUESTIONS_AMOUNT};

fn statistics() -> StatisticService<MemoryStore> {
    StatisticService::new(MemoryStore::new(), QUESTIONS_AMOUNT as u32)
}

fn factory(loader: impl MoviesLoader + 'static) -> QuestionFactory {
    QuestionFactory::new(Arc::new(loader), Arc::new(NoopImageLoader)).with_seed(1)
}

fn one_good_movie() -> StaticMoviesLoader {
    StaticMoviesLoader::new(vec![Movie::new("Heat", "8.5", "https://x/heat._V1_.jpg")])
}

async fn next_event(events: &mut UnboundedReceiver<QuizEvent>) -> QuizEvent {
    tokio::time::timeout(Duration::from_secs(5), events.recv())
        .await
        .expect("Timed out waiting for an event")
        .expect("Event stream closed")
}

/// Fails the first load the way a rate-limited service does, then succeeds.
#[derive(Debug, Default)]
struct FlakyMoviesLoader {
    calls: AtomicUsize,
}

#[async_trait]
impl MoviesLoader for FlakyMoviesLoader {
    async fn load_movies(&self) -> Result<MostPopularMovies, CatalogError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(CatalogError::Api("Limit Exceeded".to_string()));
        }
        Ok(MostPopularMovies {
            error_message: String::new(),
            items: vec![Movie::new("Heat", "8.5", "")],
        })
    }
}

#[tokio::test]
async fn test_all_yes_round_scores_ten() {
    let (statistics, rounds_played) = run_quiz(
        statistics(),
        factory(one_good_movie()),
        Box::new(DefaultStrategy::default()),
        Duration::ZERO,
        Some(1),
    )
    .await
    .expect("Quiz should complete");

    assert_eq!(rounds_played, 1);
    assert_eq!(statistics.games_count().await.unwrap(), 1);
    assert_eq!(statistics.correct_total().await.unwrap(), 10);
    let best = statistics.best_game().await.unwrap();
    assert_eq!((best.correct, best.total), (10, 10));
    assert_eq!(statistics.total_accuracy().await.unwrap(), 100.0);
}

#[tokio::test]
async fn test_several_random_rounds_are_all_recorded() {
    let (statistics, rounds_played) = run_quiz(
        statistics(),
        factory(one_good_movie()),
        Box::new(RandomStrategy::with_seed(3)),
        Duration::ZERO,
        Some(3),
    )
    .await
    .expect("Quiz should complete");

    assert_eq!(rounds_played, 3);
    assert_eq!(statistics.games_count().await.unwrap(), 3);
    let correct = statistics.correct_total().await.unwrap();
    assert!(correct <= 30);
    let best = statistics.best_game().await.unwrap();
    assert!(best.correct * 3 >= correct);
}

#[tokio::test]
async fn test_failed_load_shows_error_until_retry() {
    let (mut session, commands) = Session::new(
        Round::new(statistics()),
        factory(FlakyMoviesLoader::default()),
        Duration::from_secs(60),
    );
    let mut events = session.subscribe();

    let driver = async move {
        assert_eq!(next_event(&mut events).await, QuizEvent::Loading(true));
        assert_eq!(next_event(&mut events).await, QuizEvent::Loading(false));
        match next_event(&mut events).await {
            QuizEvent::Error(alert) => {
                assert_eq!(alert.title, "Error");
                assert!(alert.message.contains("Limit Exceeded"));
                assert_eq!(alert.button_text, "Try again");
            }
            other => panic!("expected an error, got {other:?}"),
        }
        assert!(events.try_recv().is_err());

        commands.send(UserCommand::Restart).unwrap();
        assert_eq!(next_event(&mut events).await, QuizEvent::Loading(true));
        assert_eq!(next_event(&mut events).await, QuizEvent::Loading(false));
        match next_event(&mut events).await {
            QuizEvent::QuestionShown(step) => assert_eq!(step.question_number, "1/10"),
            other => panic!("expected a question, got {other:?}"),
        }
        commands.send(UserCommand::Quit).unwrap();
    };

    let (statistics, ()) = tokio::join!(session.run(), driver);
    assert_eq!(statistics.games_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_no_questions_from_failing_catalog() {
    let (mut session, commands) = Session::new(
        Round::new(statistics()),
        factory(StaticMoviesLoader::failing("Limit Exceeded")),
        Duration::ZERO,
    );
    let mut events = session.subscribe();

    let driver = async move {
        let mut errors = 0;
        while errors < 3 {
            match next_event(&mut events).await {
                QuizEvent::Error(_) => {
                    errors += 1;
                    commands.send(UserCommand::Restart).unwrap();
                }
                QuizEvent::Loading(_) => {}
                other => panic!("unexpected event {other:?}"),
            }
        }
        drop(commands);
    };

    tokio::join!(session.run(), driver);
}

#[tokio::test]
async fn test_restart_mid_round_starts_over() {
    let (mut session, commands) = Session::new(
        Round::new(statistics()),
        factory(one_good_movie()),
        Duration::from_secs(60),
    );
    let mut events = session.subscribe();

    let driver = async move {
        loop {
            if let QuizEvent::QuestionShown(step) = next_event(&mut events).await {
                assert_eq!(step.question_number, "1/10");
                break;
            }
        }
        commands.send(UserCommand::Answer(Answer::Yes)).unwrap();
        assert_eq!(
            next_event(&mut events).await,
            QuizEvent::AnswerChecked { is_correct: true }
        );

        // a second answer during feedback changes nothing
        commands.send(UserCommand::Answer(Answer::No)).unwrap();
        commands.send(UserCommand::Restart).unwrap();
        match next_event(&mut events).await {
            QuizEvent::QuestionShown(step) => assert_eq!(step.question_number, "1/10"),
            other => panic!("expected the first question again, got {other:?}"),
        }
        commands.send(UserCommand::Quit).unwrap();
    };

    let (statistics, ()) = tokio::join!(session.run(), driver);
    assert_eq!(statistics.games_count().await.unwrap(), 0);
}
