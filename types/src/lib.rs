pub mod event;
pub mod game_result;
pub mod movie;
pub mod player;
pub mod question;
pub mod view_models;

pub use event::{QuizEvent, RoundPhase, UserCommand};
pub use game_result::GameResult;
pub use movie::{Movie, MostPopularMovies};
pub use player::Strategy;
pub use question::{Answer, Question, QUESTION_TEXT, RATING_THRESHOLD};
pub use view_models::{AlertModel, QuizResults, QuizStep};

/// Questions in one round.
pub const QUESTIONS_AMOUNT: usize = 10;
