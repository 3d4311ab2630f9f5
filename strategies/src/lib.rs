pub mod input_strategy;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use types::{AlertModel, Answer, QuizStep, Strategy};

pub use crate::input_strategy::InputStrategy;

#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomStrategy {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_answer(&mut self, _step: &QuizStep, available_answers: &[Answer]) -> Option<Answer> {
        available_answers.choose(&mut self.rng).copied()
    }

    fn acknowledge(&mut self, _alert: &AlertModel) -> bool {
        true
    }
}

/// Always answers yes and always presses the button.
#[derive(Debug, Default)]
pub struct DefaultStrategy {}

impl Strategy for DefaultStrategy {
    fn select_answer(&mut self, _step: &QuizStep, available_answers: &[Answer]) -> Option<Answer> {
        if available_answers.contains(&Answer::Yes) {
            return Some(Answer::Yes);
        }
        available_answers.first().copied()
    }

    fn acknowledge(&mut self, _alert: &AlertModel) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step() -> QuizStep {
        QuizStep {
            image: Vec::new(),
            question: "Is the rating of this movie greater than 7?".to_string(),
            question_number: "1/10".to_string(),
        }
    }

    #[test]
    fn test_default_strategy_says_yes() {
        let mut strategy = DefaultStrategy::default();
        assert_eq!(strategy.select_answer(&step(), &Answer::ALL), Some(Answer::Yes));
        assert_eq!(strategy.select_answer(&step(), &[Answer::No]), Some(Answer::No));
    }

    #[test]
    fn test_random_strategy_picks_available_answer() {
        let mut strategy = RandomStrategy::with_seed(7);
        for _ in 0..20 {
            assert_eq!(strategy.select_answer(&step(), &[Answer::No]), Some(Answer::No));
        }
        let answers: Vec<_> = (0..50)
            .filter_map(|_| strategy.select_answer(&step(), &Answer::ALL))
            .collect();
        assert!(answers.contains(&Answer::Yes));
        assert!(answers.contains(&Answer::No));
    }
}
