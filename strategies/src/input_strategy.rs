use std::io::{self, Write};

use itertools::Itertools;
use regex::Regex;
use types::{AlertModel, Answer, QuizStep, Strategy};

/// Reads answers from the terminal.
#[derive(Debug, Default)]
pub struct InputStrategy {}

impl Strategy for InputStrategy {
    fn select_answer(&mut self, _step: &QuizStep, available_answers: &[Answer]) -> Option<Answer> {
        println!(
            "Available answers: {}",
            available_answers.iter().sorted().join(" || ")
        );

        // if only one answer is possible, give it
        if let [answer] = available_answers {
            log::info!("Only have one answer available: {answer}");
            return Some(*answer);
        }

        let mut buf = String::new();
        loop {
            match select_answer_from_stdin(&mut buf, available_answers) {
                Ok(answer) => return Some(answer),
                Err(InputError::Closed) => return None,
                Err(InputError::Invalid(err)) => {
                    buf.clear();
                    log::error!("Error parsing message from stdin: {err}")
                }
            }
        }
    }

    fn acknowledge(&mut self, alert: &AlertModel) -> bool {
        print!("[Enter] {} / [q] quit >> ", alert.button_text);
        let _ = io::stdout().flush();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            // EOF means nobody is there to press the button
            Ok(0) => false,
            Ok(_) => !is_quit(&buf),
            Err(err) => {
                log::error!("Error reading line from stdin: {err}");
                false
            }
        }
    }
}

enum InputError {
    Closed,
    Invalid(String),
}

fn select_answer_from_stdin(buf: &mut String, answers: &[Answer]) -> Result<Answer, InputError> {
    print!("Your answer? >> ");
    let _ = io::stdout().flush();
    match io::stdin().read_line(buf) {
        Ok(0) => Err(InputError::Closed),
        Ok(_) => select_answer_from_str(buf, answers).map_err(InputError::Invalid),
        Err(err) => {
            buf.clear();
            Err(InputError::Invalid(format!(
                "Error reading line from stdin: {err}"
            )))
        }
    }
}

fn select_answer_from_str(input: &str, answers: &[Answer]) -> Result<Answer, String> {
    let input = input.trim().to_lowercase();

    let yes_re = Regex::new(r"^(y|yes|да|д|\+)$").expect("Valid yes regex");
    let no_re = Regex::new(r"^(n|no|нет|н|-)$").expect("Valid no regex");

    let answer = if yes_re.is_match(&input) {
        Answer::Yes
    } else if no_re.is_match(&input) {
        Answer::No
    } else {
        return Err(format!("Unable to parse a yes or no answer from string: {input:?}"));
    };

    if answers.contains(&answer) {
        Ok(answer)
    } else {
        Err(format!("{answer} is not a permitted answer right now"))
    }
}

fn is_quit(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "q" | "quit" | "exit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_yes_and_no() {
        for input in ["y", "Yes\n", " YES ", "да", "+"] {
            assert_eq!(
                select_answer_from_str(input, &Answer::ALL),
                Ok(Answer::Yes),
                "input {input:?}"
            );
        }
        for input in ["n", "No\n", "нет", "-"] {
            assert_eq!(
                select_answer_from_str(input, &Answer::ALL),
                Ok(Answer::No),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(select_answer_from_str("maybe", &Answer::ALL).is_err());
        assert!(select_answer_from_str("", &Answer::ALL).is_err());
        assert!(select_answer_from_str("yesno", &Answer::ALL).is_err());
    }

    #[test]
    fn test_rejects_unavailable_answer() {
        assert!(select_answer_from_str("y", &[Answer::No]).is_err());
    }

    #[test]
    fn test_quit_words() {
        assert!(is_quit("q\n"));
        assert!(is_quit(" Quit "));
        assert!(!is_quit("\n"));
    }
}
