//! Rotating companion messages

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

/// Shown until the first rotation
pub const COMPANION_GREETING: &str = "Hello. I am Baymax, your personal healthcare companion.";

pub const COMPANION_MESSAGES: [&str; 8] = [
    "Hello. I am Baymax, your healthcare companion.",
    "Click 'Submit Order' to check drug interactions instantly.",
    "Need a quick overview? Tap 'Show Patient Summary' for clinical highlights.",
    "Not sure about discharge? Use the 'Check Discharge Eligibility' button.",
    "I can help flag dangerous drug combinations. Just enter a new medication.",
    "You can switch patients using the dropdown at the top left.",
    "Don't forget to review allergies before placing a new drug order.",
    "You are doing an incredible job. Patient safety starts with you.",
];

pub const COMPANION_PERIOD: Duration = Duration::from_secs(10);

/// Background ticker publishing the current companion message.
///
/// Must be spawned inside a tokio runtime. Dropping the handle stops the
/// ticker.
#[derive(Debug)]
pub struct Companion {
    receiver: watch::Receiver<&'static str>,
    task: JoinHandle<()>,
}

impl Companion {
    /// Start rotating through [`COMPANION_MESSAGES`], one every `period`
    pub fn spawn(period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let (sender, receiver) = watch::channel(COMPANION_GREETING);

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            for message in COMPANION_MESSAGES.iter().cycle() {
                ticker.tick().await;
                if sender.send(*message).is_err() {
                    break;
                }
            }
        });

        Self { receiver, task }
    }

    /// Message currently shown
    pub fn current(&self) -> &'static str {
        *self.receiver.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<&'static str> {
        self.receiver.clone()
    }
}

impl Drop for Companion {
    fn drop(&mut self) {
        self.task.abort();
    }
}
