use chrono::{DateTime, Utc};
use types::GameResult;

use crate::{KeyValueStore, ScalarValue, StorageError};

const GAMES_COUNT: &str = "gamesCount";
const CORRECT: &str = "correct";
const BEST_GAME_CORRECT: &str = "bestGame.correct";
const BEST_GAME_TOTAL: &str = "bestGame.total";
const BEST_GAME_DATE: &str = "bestGame.date";

const ALL_KEYS: [&str; 5] = [
    GAMES_COUNT,
    CORRECT,
    BEST_GAME_CORRECT,
    BEST_GAME_TOTAL,
    BEST_GAME_DATE,
];

/// Lifetime statistics over an injected key-value store.
#[derive(Debug)]
pub struct StatisticService<S: KeyValueStore> {
    store: S,
    round_size: u32,
}

impl<S: KeyValueStore> StatisticService<S> {
    pub fn new(store: S, round_size: u32) -> Self {
        Self { store, round_size }
    }

    pub fn store_ref(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    async fn get_int(&self, key: &str) -> Result<i64, StorageError> {
        match self.store.get(key).await? {
            None => Ok(0),
            Some(ScalarValue::Int(value)) => Ok(value),
            Some(ScalarValue::Date(_)) => Err(StorageError::InvalidValue {
                key: key.to_string(),
            }),
        }
    }

    async fn get_date(&self, key: &str) -> Result<DateTime<Utc>, StorageError> {
        match self.store.get(key).await? {
            None => Ok(Utc::now()),
            Some(ScalarValue::Date(value)) => Ok(value),
            Some(ScalarValue::Int(_)) => Err(StorageError::InvalidValue {
                key: key.to_string(),
            }),
        }
    }

    async fn get_count(&self, key: &str) -> Result<u32, StorageError> {
        let value = self.get_int(key).await?;
        u32::try_from(value).map_err(|_| StorageError::InvalidValue {
            key: key.to_string(),
        })
    }

    pub async fn games_count(&self) -> Result<u32, StorageError> {
        self.get_count(GAMES_COUNT).await
    }

    pub async fn correct_total(&self) -> Result<u32, StorageError> {
        self.get_count(CORRECT).await
    }

    /// A zero result dated now when nothing has been recorded yet.
    pub async fn best_game(&self) -> Result<GameResult, StorageError> {
        Ok(GameResult {
            correct: self.get_count(BEST_GAME_CORRECT).await?,
            total: self.get_count(BEST_GAME_TOTAL).await?,
            date: self.get_date(BEST_GAME_DATE).await?,
        })
    }

    pub async fn total_accuracy(&self) -> Result<f64, StorageError> {
        let games = self.games_count().await?;
        let possible = f64::from(games) * f64::from(self.round_size);
        if possible == 0.0 {
            return Ok(0.0);
        }
        let correct = self.correct_total().await?;
        Ok(f64::from(correct) * 100.0 / possible)
    }

    /// Records one finished game. Counters and best game are written in a
    /// single batch, so a failed write leaves the previous statistics intact.
    pub async fn store(&mut self, correct: u32, total: u32) -> Result<(), StorageError> {
        let games = self.games_count().await? + 1;
        let correct_total = self.correct_total().await? + correct;
        let mut values = vec![
            (GAMES_COUNT, ScalarValue::Int(games.into())),
            (CORRECT, ScalarValue::Int(correct_total.into())),
        ];

        let current_game = GameResult::new(correct, total);
        let best_game = self.best_game().await?;
        let new_best = current_game.is_better_than(&best_game);
        if new_best {
            values.extend([
                (BEST_GAME_CORRECT, ScalarValue::Int(current_game.correct.into())),
                (BEST_GAME_TOTAL, ScalarValue::Int(current_game.total.into())),
                (BEST_GAME_DATE, ScalarValue::Date(current_game.date)),
            ]);
        }

        self.store.set_many(values).await?;
        if new_best {
            tracing::info!("New best game: {current_game} (was {best_game})");
        }
        tracing::debug!("Recorded game {correct}/{total}; {games} games played");
        Ok(())
    }

    /// Forget everything recorded so far.
    pub async fn reset(&mut self) -> Result<(), StorageError> {
        for key in ALL_KEYS {
            self.store.remove(key).await?;
        }
        tracing::info!("Statistics cleared");
        Ok(())
    }
}
