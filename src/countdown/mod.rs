use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const WAR_STARTED: &str = "War has started!";

/// Display value for the time remaining until `war_time`.
///
/// No scheduled time yields no display. A future time yields zero-padded
/// `HH:MM:SS` over the whole-second difference (hours are not wrapped at
/// 24). A time at or before `now` yields the fixed started indicator.
pub fn remaining(now: DateTime<Utc>, war_time: Option<DateTime<Utc>>) -> Option<String> {
    let target = war_time?;
    let diff = (target - now).num_seconds();

    if diff > 0 {
        let hours = diff / 3600;
        let minutes = (diff % 3600) / 60;
        let seconds = diff % 60;
        Some(format!("{:02}:{:02}:{:02}", hours, minutes, seconds))
    } else {
        Some(WAR_STARTED.to_string())
    }
}

/// Recomputes the countdown once per second while the handle is alive.
///
/// The task is aborted on drop, mirroring view teardown.
pub struct CountdownTicker {
    handle: JoinHandle<()>,
    rx: watch::Receiver<Option<String>>,
}

impl CountdownTicker {
    pub fn spawn(war_time: Option<DateTime<Utc>>) -> Self {
        let (tx, rx) = watch::channel(remaining(Utc::now(), war_time));

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
            interval.tick().await; // first tick completes immediately
            loop {
                interval.tick().await;
                if tx.send(remaining(Utc::now(), war_time)).is_err() {
                    break;
                }
            }
        });

        Self { handle, rx }
    }

    pub fn display(&self) -> Option<String> {
        self.rx.borrow().clone()
    }

    /// Wait for the next recomputation and return the fresh display value
    pub async fn changed(&mut self) -> Option<String> {
        if self.rx.changed().await.is_err() {
            return None;
        }
        self.rx.borrow().clone()
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn future_time_formats_zero_padded() {
        let now = Utc::now();
        let display = remaining(now, Some(now + Duration::seconds(3661)));
        assert_eq!(display.as_deref(), Some("01:01:01"));
    }

    #[test]
    fn hours_are_not_wrapped_at_24() {
        let now = Utc::now();
        let display = remaining(now, Some(now + Duration::seconds(90_000)));
        assert_eq!(display.as_deref(), Some("25:00:00"));
    }

    #[test]
    fn past_time_reports_started() {
        let now = Utc::now();
        let display = remaining(now, Some(now - Duration::seconds(1)));
        assert_eq!(display.as_deref(), Some(WAR_STARTED));
    }

    #[test]
    fn unscheduled_war_has_no_display() {
        assert_eq!(remaining(Utc::now(), None), None);
    }

    #[tokio::test]
    async fn ticker_publishes_updates() {
        let war_time = Some(Utc::now() + Duration::seconds(30));
        let mut ticker = CountdownTicker::spawn(war_time);

        assert!(ticker.display().is_some());
        let next = ticker.changed().await;
        assert!(next.is_some());
    }
}
