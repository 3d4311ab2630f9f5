use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use types::{AlertModel, Answer, QuizEvent, Strategy, UserCommand};

/// An automated player that keeps hitting "Try again" against a dead
/// service would never stop.
const MAX_CONSECUTIVE_ERRORS: usize = 3;

/// Terminal presentation: prints quiz events and turns the player's choices
/// into commands. Blocks on the event stream, so run it off the async
/// runtime (`spawn_blocking` or a plain thread).
///
/// Returns the number of rounds that reached the results screen.
pub fn run_player(
    strategy: &mut dyn Strategy,
    mut events: UnboundedReceiver<QuizEvent>,
    commands: UnboundedSender<UserCommand>,
    max_rounds: Option<usize>,
) -> usize {
    let mut rounds_played = 0;
    let mut consecutive_errors = 0;

    while let Some(event) = events.blocking_recv() {
        let command = match event {
            QuizEvent::Loading(true) => {
                println!("Loading movies...");
                None
            }
            QuizEvent::Loading(false) => None,
            QuizEvent::QuestionShown(step) => {
                consecutive_errors = 0;
                println!("\n{step}");
                Some(match strategy.select_answer(&step, &Answer::ALL) {
                    Some(answer) => UserCommand::Answer(answer),
                    None => UserCommand::Quit,
                })
            }
            QuizEvent::AnswerChecked { is_correct } => {
                println!("{}", if is_correct { "Correct!" } else { "Wrong!" });
                None
            }
            QuizEvent::RoundFinished(results) => {
                rounds_played += 1;
                let alert = AlertModel::from(&results);
                print_alert(&alert);
                let wants_more = max_rounds.map_or(true, |max| rounds_played < max);
                Some(if wants_more && strategy.acknowledge(&alert) {
                    UserCommand::Restart
                } else {
                    UserCommand::Quit
                })
            }
            QuizEvent::Error(alert) => {
                consecutive_errors += 1;
                print_alert(&alert);
                Some(
                    if consecutive_errors < MAX_CONSECUTIVE_ERRORS && strategy.acknowledge(&alert) {
                        UserCommand::Restart
                    } else {
                        log::error!("Giving up after {consecutive_errors} errors in a row");
                        UserCommand::Quit
                    },
                )
            }
        };

        if let Some(command) = command {
            log::debug!("Sending {command:?}");
            if commands.send(command).is_err() || command == UserCommand::Quit {
                break;
            }
        }
    }

    rounds_played
}

fn print_alert(alert: &AlertModel) {
    println!("\n{alert}\n");
}
