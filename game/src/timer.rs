use std::{pin::Pin, time::Duration};

use tokio::time::{sleep, Sleep};

/// One-shot alarm for the pause between an answer and the next question.
/// Re-arming replaces the pending alarm; a disarmed timer never fires.
#[derive(Debug)]
pub struct FeedbackTimer {
    delay: Duration,
    alarm: Option<Pin<Box<Sleep>>>,
}

impl FeedbackTimer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, alarm: None }
    }

    pub fn schedule(&mut self) {
        self.schedule_in(self.delay);
    }

    pub fn schedule_in(&mut self, delay: Duration) {
        self.alarm = Some(Box::pin(sleep(delay)));
    }

    pub fn cancel(&mut self) {
        self.alarm = None;
    }

    pub fn is_armed(&self) -> bool {
        self.alarm.is_some()
    }

    /// Resolves when the armed alarm goes off and disarms it. Pends forever
    /// while disarmed, so it can sit in a `select!` unconditionally.
    pub async fn fired(&mut self) {
        match self.alarm.as_mut() {
            Some(alarm) => {
                alarm.as_mut().await;
                self.alarm = None;
            }
            None => std::future::pending().await,
        }
    }
}
