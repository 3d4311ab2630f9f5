use std::sync::Arc;

use catalog::{CatalogError, ImageLoader, MoviesLoader};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use types::{Movie, Question};

use crate::QuizError;

/// Owns the session's catalog and turns random movies into questions.
///
/// Movies are drawn with replacement, so a round can ask about the same
/// movie more than once.
pub struct QuestionFactory {
    movies_loader: Arc<dyn MoviesLoader>,
    image_loader: Arc<dyn ImageLoader>,
    movies: Vec<Movie>,
    rng: StdRng,
}

impl std::fmt::Debug for QuestionFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "QuestionFactory: {{movies: {}}}", self.movies.len())
    }
}

impl QuestionFactory {
    pub fn new(movies_loader: Arc<dyn MoviesLoader>, image_loader: Arc<dyn ImageLoader>) -> Self {
        Self {
            movies_loader,
            image_loader,
            movies: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn movies_loader(&self) -> Arc<dyn MoviesLoader> {
        Arc::clone(&self.movies_loader)
    }

    pub fn image_loader(&self) -> Arc<dyn ImageLoader> {
        Arc::clone(&self.image_loader)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Loads the catalog in place. A failed load keeps the previous catalog.
    pub async fn load_data(&mut self) -> Result<usize, QuizError> {
        let movies = load_catalog(self.movies_loader.as_ref()).await?;
        self.replace_catalog(movies);
        Ok(self.movies.len())
    }

    pub fn replace_catalog(&mut self, movies: Vec<Movie>) {
        log::info!("Catalog replaced: {} movies", movies.len());
        self.movies = movies;
    }

    pub fn pick_movie(&mut self) -> Result<Movie, QuizError> {
        self.movies
            .choose(&mut self.rng)
            .cloned()
            .ok_or(QuizError::NoMoviesAvailable)
    }

    pub async fn next_question(&mut self) -> Result<Question, QuizError> {
        let movie = self.pick_movie()?;
        Ok(make_question(&movie, self.image_loader.as_ref()).await)
    }
}

pub async fn load_catalog(loader: &dyn MoviesLoader) -> Result<Vec<Movie>, CatalogError> {
    Ok(loader.load_movies().await?.items)
}

/// Builds the question for `movie`. The poster is best effort: if it can't be
/// fetched the question goes out without one.
pub async fn make_question(movie: &Movie, image_loader: &dyn ImageLoader) -> Question {
    let url = movie.resized_image_url();
    let image = match image_loader.load_image(&url).await {
        Ok(image) => image,
        Err(err) => {
            log::warn!("Failed to load image for {movie}: {err}");
            Vec::new()
        }
    };
    let question = Question::for_movie(movie, image);
    log::debug!(
        "Question for {movie}: correct answer {}",
        question.correct_answer
    );
    question
}
